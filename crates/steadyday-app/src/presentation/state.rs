use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    ConsistencyQueries, FocusQueries, MoodQueries, PersonalityQueries,
};
use crate::application::services::{AssistantService, Settings};
use steadyday_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub record_completion: Arc<RecordCompletionCommandHandler>,
    pub remove_subject: Arc<RemoveSubjectCommandHandler>,
    pub log_mood: Arc<LogMoodCommandHandler>,
    pub record_focus_session: Arc<RecordFocusSessionCommandHandler>,
    pub submit_questionnaire: Arc<SubmitQuestionnaireCommandHandler>,
}

pub struct Queries {
    pub consistency: Arc<ConsistencyQueries>,
    pub focus: Arc<FocusQueries>,
    pub mood: Arc<MoodQueries>,
    pub personality: Arc<PersonalityQueries>,
}

pub struct Services {
    pub assistant: Arc<AssistantService>,
}

pub struct AppState {
    pub db: Arc<Database>,
    pub settings: Settings,
    pub command_handlers: CommandHandlers,
    pub queries: Queries,
    pub services: Services,
}
