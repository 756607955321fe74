use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::ClassificationDto;

// ============================================================
// Submit Questionnaire Command
// ============================================================

/// Answers are 1-5 Likert values, one per question in bank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuestionnaireCommand {
    pub owner_id: String,
    pub answers: Vec<u8>,
}

impl Command for SubmitQuestionnaireCommand {}

pub type SubmitQuestionnaireResult = ClassificationDto;
