use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Classification, PersonalityType, TypeScore};
use crate::shared::{DomainError, UserId};

/// The latest questionnaire outcome of one owner. Retaking the
/// questionnaire replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityResult {
    owner_id: UserId,
    personality_type: PersonalityType,
    scores: Vec<TypeScore>,
    completed_at: DateTime<Utc>,
}

impl PersonalityResult {
    /// Only a classification with a dominant type can be stored.
    pub fn from_classification(
        owner_id: UserId,
        classification: &Classification,
    ) -> Result<Self, DomainError> {
        if owner_id.as_str().trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Personality results require an owner".to_string(),
            ));
        }

        let personality_type = classification.dominant.ok_or_else(|| {
            DomainError::Validation("Cannot store a result without any answers".to_string())
        })?;

        Ok(Self {
            owner_id,
            personality_type,
            scores: classification.scores.clone(),
            completed_at: Utc::now(),
        })
    }

    pub fn restore(
        owner_id: UserId,
        personality_type: PersonalityType,
        scores: Vec<TypeScore>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_id,
            personality_type,
            scores,
            completed_at,
        }
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn personality_type(&self) -> PersonalityType {
        self.personality_type
    }

    pub fn scores(&self) -> &[TypeScore] {
        &self.scores
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::{classify, question_bank, LikertAnswer};

    fn answers(values: &[u8]) -> Vec<LikertAnswer> {
        values.iter().map(|v| LikertAnswer::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_result_keeps_dominant_type_and_scores() {
        let mut values = vec![2u8; 18];
        values[3] = 5;
        values[12] = 5;
        let classification = classify(&question_bank(), &answers(&values)).unwrap();

        let result =
            PersonalityResult::from_classification(UserId::from_string("u1"), &classification)
                .unwrap();

        assert_eq!(result.personality_type(), PersonalityType::Four);
        assert_eq!(result.scores().len(), 9);
        assert_eq!(result.owner_id().as_str(), "u1");
    }

    #[test]
    fn test_empty_classification_is_not_stored() {
        let classification = classify(&[], &[]).unwrap();

        let result =
            PersonalityResult::from_classification(UserId::from_string("u1"), &classification);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_blank_owner_is_rejected() {
        let classification = classify(&question_bank(), &answers(&[3u8; 18])).unwrap();

        let result =
            PersonalityResult::from_classification(UserId::from_string(" "), &classification);

        assert!(matches!(result, Err(DomainError::MissingOwner(_))));
    }
}
