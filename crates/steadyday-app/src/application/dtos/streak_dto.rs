use serde::{Deserialize, Serialize};

use super::format_day;
use steadyday_domain::consistency::{CompletionEvent, QualifyingThreshold, SubjectKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEventDto {
    pub event_id: String,
    pub date: String, // YYYY-MM-DD
    pub completion_ratio: f64,
    pub qualifies: bool,
    pub notes: Option<String>,
}

impl CompletionEventDto {
    pub fn from_event(event: &CompletionEvent, threshold: QualifyingThreshold) -> Self {
        Self {
            event_id: event.id().to_string(),
            date: format_day(event.day()),
            completion_ratio: event.completion_ratio().value(),
            qualifies: event.completion_ratio().meets(threshold),
            notes: event.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakDto {
    pub owner_id: String,
    pub subject_id: String,
    pub kind: SubjectKind,
    pub threshold: f64,
    pub window_start: String,
    pub window_end: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub qualifying_days: u32,
    pub total_executions: u32,
    /// Mean completion in whole percent, for display
    pub completion_rate: u32,
    /// Unrounded mean completion percentage
    pub completion_rate_exact: f64,
    /// Last few events of the window, oldest first
    pub recent_events: Vec<CompletionEventDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDayDto {
    pub date: String, // YYYY-MM-DD
    pub completion_ratio: Option<f64>,
    pub qualifies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatsDto {
    pub total_days: u32,
    pub recorded_days: u32,
    pub qualifying_days: u32,
    pub qualifying_rate: f64,       // qualifying days / days in month (0.0 - 100.0)
    pub average_completion: f64,    // mean ratio of recorded days (0.0 - 100.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDto {
    pub owner_id: String,
    pub subject_id: String,
    pub kind: SubjectKind,
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDayDto>,
    pub month_stats: MonthStatsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub date: String,
    pub completion_ratio: f64,
    pub completion_percent: u32,
    pub qualifies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDto {
    pub owner_id: String,
    pub subject_id: String,
    pub kind: SubjectKind,
    pub start_date: String,
    pub end_date: String,
    pub data_points: Vec<TrendDataPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSummaryDto {
    pub subject_id: String,
    pub kind: SubjectKind,
    pub current_streak: u32,
    pub completion_rate: u32,
}
