use std::sync::Arc;

use crate::application::dtos::{PersonalityResultDto, QuestionDto};
use steadyday_domain::personality::{
    question_bank, PersonalityResultRepository, PersonalityType, Question,
};
use steadyday_domain::shared::{DomainError, UserId};

/// Personality questionnaire over the built-in question bank.
pub struct PersonalityQueries {
    result_repo: Arc<dyn PersonalityResultRepository>,
    questions: Vec<Question>,
}

impl PersonalityQueries {
    pub fn new(result_repo: Arc<dyn PersonalityResultRepository>) -> Self {
        Self {
            result_repo,
            questions: question_bank(),
        }
    }

    pub fn questions(&self) -> Vec<QuestionDto> {
        self.questions
            .iter()
            .map(|q| QuestionDto {
                id: q.id,
                prompt: q.prompt.clone(),
                category: q.category.number(),
            })
            .collect()
    }

    pub async fn stored_result(
        &self,
        owner_id: &str,
    ) -> Result<Option<PersonalityResultDto>, DomainError> {
        let result = self
            .result_repo
            .find_by_owner(&UserId::from_string(owner_id))
            .await?;
        Ok(result.as_ref().map(PersonalityResultDto::from))
    }

    pub async fn stored_type(
        &self,
        owner_id: &str,
    ) -> Result<Option<PersonalityType>, DomainError> {
        let result = self
            .result_repo
            .find_by_owner(&UserId::from_string(owner_id))
            .await?;
        Ok(result.map(|r| r.personality_type()))
    }
}
