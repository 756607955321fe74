use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use log::{error, info};

use steadyday_domain::shared::reference_day;
use steadyday_infrastructure::logging;
use steadyday_lib::application::services::ConfigService;
use steadyday_lib::presentation::bootstrap::build_app_state;
use steadyday_lib::presentation::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config_path = match args.config.clone() {
        Some(path) => path,
        None => ConfigService::default_path()?,
    };
    let config = ConfigService::load(&config_path)?;
    let settings = config.settings().clone();

    let log_dir = dirs::data_dir()
        .context("Failed to resolve data dir")?
        .join("steadyday")
        .join("logs");
    logging::init_logger(log_dir, settings.log_level.as_str())?;
    info!(
        "steadyday v{} starting, config={}",
        env!("CARGO_PKG_VERSION"),
        config.config_path().display()
    );

    let today = match args.date {
        Some(day) => day,
        None => reference_day(Utc::now(), settings.utc_offset()?),
    };
    let owner_id = args
        .user
        .clone()
        .unwrap_or_else(|| settings.default_user.clone());

    let state = build_app_state(settings).await?;

    match cli::run(args.command, &state, &owner_id, today).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e)?);
            std::process::exit(1);
        }
    }
}
