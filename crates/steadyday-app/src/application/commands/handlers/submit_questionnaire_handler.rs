use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::personality_commands::*;
use crate::application::dtos::ClassificationDto;
use steadyday_domain::personality::{
    classify, profile_for, question_bank, LikertAnswer, PersonalityResult,
    PersonalityResultRepository, Question,
};
use steadyday_domain::shared::{DomainError, UserId};

/// Classifies a completed questionnaire and keeps it as the owner's result.
pub struct SubmitQuestionnaireCommandHandler {
    result_repo: Arc<dyn PersonalityResultRepository>,
    questions: Vec<Question>,
}

impl SubmitQuestionnaireCommandHandler {
    pub fn new(result_repo: Arc<dyn PersonalityResultRepository>) -> Self {
        Self {
            result_repo,
            questions: question_bank(),
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitQuestionnaireCommand> for SubmitQuestionnaireCommandHandler {
    type Result = SubmitQuestionnaireResult;

    async fn handle(&self, cmd: SubmitQuestionnaireCommand) -> Result<Self::Result, DomainError> {
        if cmd.owner_id.trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Submitting a questionnaire requires an owner".to_string(),
            ));
        }

        let answers = cmd
            .answers
            .iter()
            .map(|a| LikertAnswer::new(*a))
            .collect::<Result<Vec<_>, _>>()?;

        let classification = classify(&self.questions, &answers)?;

        if classification.dominant.is_some() {
            let result = PersonalityResult::from_classification(
                UserId::from_string(&cmd.owner_id),
                &classification,
            )?;
            self.result_repo.upsert(&result).await?;
        }

        info!(
            "[personality] classified owner_id={} answers={} dominant={:?}",
            cmd.owner_id,
            answers.len(),
            classification.dominant.map(|t| t.number())
        );

        let profile = classification.dominant.map(profile_for);
        Ok(ClassificationDto::new(classification, profile))
    }
}
