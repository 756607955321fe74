use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::FocusSessionDto;
use steadyday_domain::focus::FocusSessionKind;

// ============================================================
// Record Focus Session Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFocusSessionCommand {
    pub owner_id: String,
    pub day: NaiveDate,
    pub kind: FocusSessionKind,
    pub duration_minutes: u32,
}

impl Command for RecordFocusSessionCommand {}

pub type RecordFocusSessionResult = FocusSessionDto;
