use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::application::config::ConsistencyThresholds;
use steadyday_domain::consistency::SubjectKind;
use steadyday_domain::mood::DEFAULT_BASE_MINUTES;
use steadyday_domain::shared::DomainError;
use steadyday_infrastructure::completion::DEFAULT_MODEL;

const APP_DIR: &str = "steadyday";
const SETTINGS_FILE: &str = "settings.json";
const DATABASE_FILE: &str = "steadyday.db";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Persistent settings, stored as pretty JSON. Missing fields take their
/// defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,
    /// Defaults to `<data_dir>/steadyday/steadyday.db`
    pub database_path: Option<PathBuf>,
    /// Owner id used when `--user` is not given
    pub default_user: String,
    /// Offset of the reference timezone from UTC
    pub utc_offset_minutes: i32,
    pub focus_base_minutes: f64,
    pub routine_threshold: f64,
    pub habit_threshold: f64,
    pub completion_base_url: String,
    pub completion_model: String,
    /// Environment variable holding the completion API key
    pub api_key_env: String,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            database_path: None,
            default_user: "local-user".to_string(),
            utc_offset_minutes: 0,
            focus_base_minutes: DEFAULT_BASE_MINUTES,
            routine_threshold: SubjectKind::Routine.default_threshold().value(),
            habit_threshold: SubjectKind::Habit.default_threshold().value(),
            completion_base_url: "https://api.openai.com/v1".to_string(),
            completion_model: DEFAULT_MODEL.to_string(),
            api_key_env: "STEADYDAY_API_KEY".to_string(),
            http_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn thresholds(&self) -> Result<ConsistencyThresholds, DomainError> {
        ConsistencyThresholds::new(self.routine_threshold, self.habit_threshold)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, DomainError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            DomainError::Validation(format!(
                "UTC offset out of range: {} minutes",
                self.utc_offset_minutes
            ))
        })
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => {
                let data_dir = dirs::data_dir().context("Failed to resolve data dir")?;
                Ok(data_dir.join(APP_DIR).join(DATABASE_FILE))
            }
        }
    }

    /// API key read from the configured environment variable, if set.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Application configuration service
pub struct ConfigService {
    settings: Settings,
    config_path: PathBuf,
}

impl ConfigService {
    /// `<config_dir>/steadyday/settings.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to resolve config dir")?;
        Ok(config_dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from `config_path`, writing defaults when the file is missing
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref().to_path_buf();

        let settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(
                        "Invalid settings file {}, using defaults: {}",
                        config_path.display(),
                        e
                    );
                    Settings::default()
                }
            }
        } else {
            let settings = Settings::default();
            write_settings(&config_path, &settings)?;
            info!("Created default settings at {}", config_path.display());
            settings
        };

        Ok(Self {
            settings,
            config_path,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Set log level and persist to disk; applies on next start
    pub fn set_log_level(&mut self, level: LogLevel) -> Result<()> {
        self.settings.log_level = level;
        write_settings(&self.config_path, &self.settings)?;
        info!(
            "Log level {} saved to {}",
            level.as_str(),
            self.config_path.display()
        );
        Ok(())
    }
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let service = ConfigService::load(&path).unwrap();

        assert!(path.exists());
        assert_eq!(service.settings(), &Settings::default());
        let reloaded = ConfigService::load(&path).unwrap();
        assert_eq!(reloaded.settings(), &Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"default_user": "alice", "utc_offset_minutes": 120}"#).unwrap();

        let service = ConfigService::load(&path).unwrap();
        let settings = service.settings();

        assert_eq!(settings.default_user, "alice");
        assert_eq!(settings.utc_offset().unwrap().local_minus_utc(), 7200);
        assert_eq!(settings.focus_base_minutes, 25.0);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let service = ConfigService::load(&path).unwrap();

        assert_eq!(service.settings(), &Settings::default());
    }

    #[test]
    fn test_log_level_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut service = ConfigService::load(&path).unwrap();
        service.set_log_level(LogLevel::Debug).unwrap();

        let reloaded = ConfigService::load(&path).unwrap();
        assert_eq!(reloaded.settings().log_level, LogLevel::Debug);
    }

    #[test]
    fn test_thresholds_and_offset_are_validated() {
        let settings = Settings {
            routine_threshold: 1.5,
            utc_offset_minutes: 24 * 60,
            ..Settings::default()
        };

        assert!(settings.thresholds().is_err());
        assert!(settings.utc_offset().is_err());
        assert!(Settings::default().thresholds().is_ok());
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let settings = Settings {
            database_path: Some(PathBuf::from("/tmp/custom.db")),
            ..Settings::default()
        };

        assert_eq!(settings.database_path().unwrap(), PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_log_level_string() {
        assert_eq!(LogLevel::Error.as_str(), "error");
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
