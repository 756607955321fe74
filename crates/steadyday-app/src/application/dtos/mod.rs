mod assistant_dto;
mod focus_dto;
mod mood_dto;
mod personality_dto;
mod streak_dto;

pub use assistant_dto::*;
pub use focus_dto::*;
pub use mood_dto::*;
pub use personality_dto::*;
pub use streak_dto::*;

pub(crate) fn format_day(day: chrono::NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
