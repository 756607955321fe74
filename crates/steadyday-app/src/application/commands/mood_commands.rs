use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::MoodEntryDto;
use steadyday_domain::mood::MoodVector;

// ============================================================
// Log Mood Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMoodCommand {
    pub owner_id: String,
    pub day: NaiveDate,
    pub vector: MoodVector,
    pub notes: Option<String>,
}

impl Command for LogMoodCommand {}

pub type LogMoodResult = MoodEntryDto;
