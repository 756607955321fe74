use serde::{Deserialize, Serialize};

use super::PersonalityType;

pub type QuestionId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub category: PersonalityType,
}

impl Question {
    pub fn new(id: QuestionId, prompt: impl Into<String>, category: PersonalityType) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            category,
        }
    }
}

const BANK: [(&str, PersonalityType); 18] = [
    (
        "I try hard to do things the right way and get frustrated by mistakes.",
        PersonalityType::One,
    ),
    (
        "I naturally notice what other people need and I like to help.",
        PersonalityType::Two,
    ),
    (
        "I am driven by goals and like to be recognised for my achievements.",
        PersonalityType::Three,
    ),
    (
        "I value authenticity and have a rich inner emotional life.",
        PersonalityType::Four,
    ),
    (
        "I prefer to observe and analyse before acting, and I value my privacy.",
        PersonalityType::Five,
    ),
    (
        "I look for security and guidance, and I am loyal to the people and systems I trust.",
        PersonalityType::Six,
    ),
    (
        "I am optimistic, have many interests and like to keep my options open.",
        PersonalityType::Seven,
    ),
    (
        "I am direct, assertive and like to be in control of situations.",
        PersonalityType::Eight,
    ),
    (
        "I value harmony, avoid conflict and easily see different perspectives.",
        PersonalityType::Nine,
    ),
    (
        "Under stress I become more critical and perfectionist.",
        PersonalityType::One,
    ),
    (
        "I sometimes neglect my own needs to take care of others.",
        PersonalityType::Two,
    ),
    (
        "I feel energised when I am working towards a clear goal.",
        PersonalityType::Three,
    ),
    (
        "I feel different from other people and sometimes misunderstood.",
        PersonalityType::Four,
    ),
    (
        "I need time alone to process information and recharge.",
        PersonalityType::Five,
    ),
    (
        "I tend to anticipate problems and prepare for different scenarios.",
        PersonalityType::Six,
    ),
    (
        "I find it hard to commit to a single option for long.",
        PersonalityType::Seven,
    ),
    (
        "I am comfortable making hard decisions and confronting problems.",
        PersonalityType::Eight,
    ),
    (
        "I would rather keep the peace than voice my opinion and start a conflict.",
        PersonalityType::Nine,
    ),
];

/// The built-in questionnaire: two statements per type, ids 1 to 18.
pub fn question_bank() -> Vec<Question> {
    BANK.iter()
        .enumerate()
        .map(|(idx, (prompt, category))| Question::new(idx as QuestionId + 1, *prompt, *category))
        .collect()
}
