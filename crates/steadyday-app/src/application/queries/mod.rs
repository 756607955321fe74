mod consistency_queries;
mod focus_queries;
mod mood_queries;
mod personality_queries;

pub use consistency_queries::{ConsistencyQueries, RECENT_EVENTS_LIMIT};
pub use focus_queries::{FocusQueries, DEFAULT_STATS_DAYS};
pub use mood_queries::MoodQueries;
pub use personality_queries::PersonalityQueries;
