mod event;
mod completion_log;
mod repository;
mod streak;

#[cfg(test)]
mod streak_test;

pub use event::{CompletionEvent, CompletionRatio, QualifyingThreshold, SubjectKind};
pub use completion_log::{CompletionLog, UpsertOutcome};
pub use repository::CompletionEventRepository;
pub use streak::{StreakCalculator, StreakResult};
