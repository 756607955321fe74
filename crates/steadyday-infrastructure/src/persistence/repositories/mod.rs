pub mod completion_event_repo;
pub mod focus_session_repo;
pub mod in_memory_completion_repo;
pub mod mood_entry_repo;
pub mod personality_result_repo;

pub use completion_event_repo::SqliteCompletionEventRepository;
pub use focus_session_repo::SqliteFocusSessionRepository;
pub use in_memory_completion_repo::InMemoryCompletionEventRepository;
pub use mood_entry_repo::SqliteMoodEntryRepository;
pub use personality_result_repo::SqlitePersonalityResultRepository;

use chrono::NaiveDate;
use steadyday_domain::shared::DomainError;

use crate::persistence::ResultExt;

const DAY_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub(crate) fn parse_day(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT).to_serialization_err("day")
}
