use serde::{Deserialize, Serialize};

use steadyday_domain::personality::{
    profile_for, Classification, PersonalityResult, TypeProfile, TypeScore,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDto {
    pub id: u32,
    pub prompt: String,
    pub category: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationDto {
    pub dominant_type: Option<u8>,
    pub scores: Vec<TypeScore>,
    pub profile: Option<TypeProfile>,
}

impl ClassificationDto {
    pub fn new(classification: Classification, profile: Option<TypeProfile>) -> Self {
        Self {
            dominant_type: classification.dominant.map(|t| t.number()),
            scores: classification.scores,
            profile,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalityResultDto {
    pub personality_type: u8,
    pub scores: Vec<TypeScore>,
    pub profile: TypeProfile,
    pub completed_at: String,
}

impl From<&PersonalityResult> for PersonalityResultDto {
    fn from(result: &PersonalityResult) -> Self {
        Self {
            personality_type: result.personality_type().number(),
            scores: result.scores().to_vec(),
            profile: profile_for(result.personality_type()),
            completed_at: result.completed_at().to_rfc3339(),
        }
    }
}
