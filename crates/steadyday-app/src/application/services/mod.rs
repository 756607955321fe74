mod assistant_service;
mod config_service;

pub use assistant_service::AssistantService;
pub use config_service::{ConfigService, LogLevel, Settings};
