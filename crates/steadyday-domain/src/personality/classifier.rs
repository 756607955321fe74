use serde::{Deserialize, Serialize};

use super::{PersonalityType, Question};
use crate::shared::DomainError;

/// One answer on the 1 (disagree) to 5 (agree) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertAnswer(u8);

impl LikertAnswer {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::Validation(format!(
                "Answers must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LikertAnswer {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LikertAnswer> for u8 {
    fn from(value: LikertAnswer) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScore {
    pub personality_type: PersonalityType,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Summed answers for all nine types, in type order.
    pub scores: Vec<TypeScore>,
    /// `None` only when no answers were given.
    pub dominant: Option<PersonalityType>,
}

impl Classification {
    pub fn score_of(&self, personality_type: PersonalityType) -> u32 {
        self.scores
            .iter()
            .find(|s| s.personality_type == personality_type)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}

/// Sums each answer into its question's category and picks the highest total.
///
/// Ties go to the lowest type number. Totals are raw sums, so a type with
/// more questions in the set can outscore one with fewer.
pub fn classify(
    questions: &[Question],
    answers: &[LikertAnswer],
) -> Result<Classification, DomainError> {
    if questions.len() != answers.len() {
        return Err(DomainError::Validation(format!(
            "Expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let mut totals = [0u32; 9];
    for (question, answer) in questions.iter().zip(answers) {
        totals[question.category.index()] += u32::from(answer.value());
    }

    let dominant = if answers.is_empty() {
        None
    } else {
        // max_by_key keeps the last maximum; reverse so the lowest number wins.
        PersonalityType::ALL
            .iter()
            .rev()
            .max_by_key(|t| totals[t.index()])
            .copied()
    };

    let scores = PersonalityType::ALL
        .iter()
        .map(|t| TypeScore {
            personality_type: *t,
            score: totals[t.index()],
        })
        .collect();

    Ok(Classification { scores, dominant })
}
