mod log_mood_handler;
mod record_completion_handler;
mod record_focus_session_handler;
mod remove_subject_handler;
mod submit_questionnaire_handler;


pub use log_mood_handler::LogMoodCommandHandler;
pub use record_completion_handler::RecordCompletionCommandHandler;
pub use record_focus_session_handler::RecordFocusSessionCommandHandler;
pub use remove_subject_handler::RemoveSubjectCommandHandler;
pub use submit_questionnaire_handler::SubmitQuestionnaireCommandHandler;
