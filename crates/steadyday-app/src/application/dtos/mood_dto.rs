use serde::{Deserialize, Serialize};

use super::format_day;
use steadyday_domain::mood::{EnergyLevel, FocusLevel, MoodEntry, MoodLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntryDto {
    pub entry_id: String,
    pub date: String, // YYYY-MM-DD
    pub mood: MoodLevel,
    pub energy: EnergyLevel,
    pub focus: FocusLevel,
    pub mood_score: u8,
    pub notes: Option<String>,
}

impl From<&MoodEntry> for MoodEntryDto {
    fn from(entry: &MoodEntry) -> Self {
        let vector = entry.vector();
        Self {
            entry_id: entry.id().to_string(),
            date: format_day(entry.day()),
            mood: vector.mood,
            energy: vector.energy,
            focus: vector.focus,
            mood_score: vector.mood.score(),
            notes: entry.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodHistoryDto {
    pub owner_id: String,
    pub start_date: String,
    pub end_date: String,
    /// Newest first
    pub entries: Vec<MoodEntryDto>,
    /// Mean mood score (1-5) rounded to one decimal; absent without entries
    pub average_mood: Option<f64>,
}
