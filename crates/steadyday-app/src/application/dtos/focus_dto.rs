use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::format_day;
use steadyday_domain::focus::{FocusSession, FocusSessionKind, FocusStats};
use steadyday_domain::mood::MoodVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusRecommendationDto {
    pub date: String,
    pub base_minutes: f64,
    pub work_minutes: u32,
    pub break_minutes: u32,
    /// False when no mood entry existed and the base was used unchanged
    pub adapted: bool,
    pub mood: Option<MoodVector>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSessionDto {
    pub session_id: String,
    pub kind: FocusSessionKind,
    pub duration_minutes: u32,
    pub date: String, // YYYY-MM-DD
    pub completed_at: String,
}

impl From<&FocusSession> for FocusSessionDto {
    fn from(session: &FocusSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            kind: session.kind(),
            duration_minutes: session.duration_minutes(),
            date: format_day(session.day()),
            completed_at: session.completed_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusStatsDto {
    pub start_date: String,
    pub end_date: String,
    pub total_sessions: u32,
    pub total_minutes: u32,
    pub work_sessions: u32,
}

impl FocusStatsDto {
    pub fn new(start: NaiveDate, end: NaiveDate, stats: FocusStats) -> Self {
        Self {
            start_date: format_day(start),
            end_date: format_day(end),
            total_sessions: stats.total_sessions,
            total_minutes: stats.total_minutes,
            work_sessions: stats.work_sessions,
        }
    }
}
