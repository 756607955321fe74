use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    ConsistencyQueries, FocusQueries, MoodQueries, PersonalityQueries,
};
use crate::application::services::{AssistantService, Settings};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Services};
use steadyday_domain::assistant::CompletionClient;
use steadyday_domain::consistency::CompletionEventRepository;
use steadyday_domain::focus::FocusSessionRepository;
use steadyday_domain::mood::MoodEntryRepository;
use steadyday_domain::personality::PersonalityResultRepository;
use steadyday_domain::shared::DomainError;
use steadyday_infrastructure::completion::{CompletionSettings, OpenAiCompletionClient};
use steadyday_infrastructure::config::TimeoutConfig;
use steadyday_infrastructure::persistence::{
    repositories::{
        SqliteCompletionEventRepository, SqliteFocusSessionRepository, SqliteMoodEntryRepository,
        SqlitePersonalityResultRepository,
    },
    Database, ResultExt,
};

/// Open the configured database and wire every handler, query and service
pub async fn build_app_state(settings: Settings) -> anyhow::Result<AppState> {
    let started_at = Instant::now();

    let db_path = settings.database_path()?;
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid database path"))?;
    info!("Database path: {}", db_path_str);

    let db = Database::new(db_path_str).await?;
    let state = build_app_state_with_database(db, settings).await?;

    info!(
        "✓ App state ready ({}ms)",
        started_at.elapsed().as_millis()
    );
    Ok(state)
}

/// Wire the app against an already opened database; migrations run here
pub async fn build_app_state_with_database(
    db: Database,
    settings: Settings,
) -> Result<AppState, DomainError> {
    db.run_migrations().await?;
    let db = Arc::new(db);
    let pool = Arc::new(db.pool().clone());

    let event_repo: Arc<dyn CompletionEventRepository> =
        Arc::new(SqliteCompletionEventRepository::new(pool.clone()));
    let mood_repo: Arc<dyn MoodEntryRepository> =
        Arc::new(SqliteMoodEntryRepository::new(pool.clone()));
    let session_repo: Arc<dyn FocusSessionRepository> =
        Arc::new(SqliteFocusSessionRepository::new(pool.clone()));
    let result_repo: Arc<dyn PersonalityResultRepository> =
        Arc::new(SqlitePersonalityResultRepository::new(pool));

    let thresholds = settings.thresholds()?;

    let command_handlers = CommandHandlers {
        record_completion: Arc::new(RecordCompletionCommandHandler::new(
            event_repo.clone(),
            thresholds,
        )),
        remove_subject: Arc::new(RemoveSubjectCommandHandler::new(event_repo.clone())),
        log_mood: Arc::new(LogMoodCommandHandler::new(mood_repo.clone())),
        record_focus_session: Arc::new(RecordFocusSessionCommandHandler::new(
            session_repo.clone(),
        )),
        submit_questionnaire: Arc::new(SubmitQuestionnaireCommandHandler::new(
            result_repo.clone(),
        )),
    };

    let queries = Queries {
        consistency: Arc::new(ConsistencyQueries::new(event_repo, thresholds)),
        focus: Arc::new(FocusQueries::new(
            mood_repo.clone(),
            session_repo,
            settings.focus_base_minutes,
        )),
        mood: Arc::new(MoodQueries::new(mood_repo)),
        personality: Arc::new(PersonalityQueries::new(result_repo)),
    };

    let services = Services {
        assistant: Arc::new(AssistantService::new(build_completion_client(&settings)?)),
    };

    Ok(AppState {
        db,
        settings,
        command_handlers,
        queries,
        services,
    })
}

/// `None` when no API key is available; the assistant then answers from
/// its templates.
fn build_completion_client(
    settings: &Settings,
) -> Result<Option<Arc<dyn CompletionClient>>, DomainError> {
    let Some(api_key) = settings.api_key() else {
        warn!(
            "[assistant] {} not set, replies will use templates",
            settings.api_key_env
        );
        return Ok(None);
    };

    let base_url = Url::parse(&settings.completion_base_url).to_infra_err()?;
    let completion_settings = CompletionSettings::new(base_url, Some(api_key))
        .with_model(settings.completion_model.clone());
    let timeouts = TimeoutConfig::new().with_http_request_secs(settings.http_timeout_secs);

    let client = OpenAiCompletionClient::new(completion_settings, &timeouts)?;
    info!(
        "[assistant] completion client ready endpoint={} model={}",
        client.endpoint(),
        settings.completion_model
    );
    Ok(Some(Arc::new(client)))
}
