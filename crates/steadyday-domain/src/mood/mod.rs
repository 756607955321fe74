mod duration;
mod entry;
mod repository;
mod scale;

pub use duration::{
    break_minutes, AdaptiveDurationMapper, DEFAULT_BASE_MINUTES, MAX_SESSION_MINUTES,
    MIN_BREAK_MINUTES, MIN_SESSION_MINUTES,
};
pub use entry::{average_mood_score, MoodEntry};
pub use repository::MoodEntryRepository;
pub use scale::{EnergyLevel, FocusLevel, MoodLevel, MoodVector};
