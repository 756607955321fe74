use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use steadyday_domain::consistency::{CompletionRatio, SubjectKind};
use steadyday_domain::shared::DomainError;

/// How a completion was reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompletionReport {
    Ratio { value: f64 },
    Steps { completed: u32, total: u32 },
    Done { done: bool },
}

impl CompletionReport {
    pub fn to_ratio(self) -> Result<CompletionRatio, DomainError> {
        match self {
            CompletionReport::Ratio { value } => CompletionRatio::new(value),
            CompletionReport::Steps { completed, total } => {
                CompletionRatio::from_steps(completed, total)
            }
            CompletionReport::Done { done } => Ok(CompletionRatio::from_done(done)),
        }
    }
}

// ============================================================
// Record Completion Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCompletionCommand {
    pub owner_id: String,
    pub subject_id: String,
    pub kind: SubjectKind,
    /// Reference day the report belongs to
    pub day: NaiveDate,
    pub report: CompletionReport,
    pub notes: Option<String>,
}

impl Command for RecordCompletionCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCompletionResult {
    pub subject_id: String,
    pub day: String,
    pub completion_ratio: f64,
    pub qualifies: bool,
}

// ============================================================
// Remove Subject Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSubjectCommand {
    pub owner_id: String,
    pub subject_id: String,
}

impl Command for RemoveSubjectCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSubjectResult {
    pub subject_id: String,
    pub removed_events: u64,
}
