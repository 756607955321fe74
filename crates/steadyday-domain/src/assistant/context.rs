use serde::{Deserialize, Serialize};

use crate::personality::PersonalityType;

/// Facts about the user passed explicitly into the assistant prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub recent_mood_average: Option<f64>,
    pub personality_type: Option<PersonalityType>,
    pub tracked_subjects: u32,
    pub active_streaks: u32,
}

pub fn system_prompt(context: &UserContext) -> String {
    let mood = context
        .recent_mood_average
        .map(|avg| format!("{:.1}/5", avg))
        .unwrap_or_else(|| "not recorded".to_string());
    let personality = context
        .personality_type
        .map(|t| format!("type {}", t.number()))
        .unwrap_or_else(|| "not defined".to_string());

    format!(
        "You are an assistant specialised in ADHD and personal productivity.\n\
         \n\
         User context:\n\
         - Tracked routines and habits: {}\n\
         - Subjects with an active streak: {}\n\
         - Recent average mood: {}\n\
         - Personality: {}\n\
         \n\
         Guidelines:\n\
         - Be empathetic about the challenges of ADHD\n\
         - Offer practical, specific tips\n\
         - Use positive, motivating language\n\
         - Keep answers concise but useful\n\
         - Adapt suggestions to the personality type when known\n\
         - Focus on small, actionable steps",
        context.tracked_subjects, context.active_streaks, mood, personality
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_known_context() {
        let context = UserContext {
            recent_mood_average: Some(3.67),
            personality_type: Some(PersonalityType::Seven),
            tracked_subjects: 4,
            active_streaks: 2,
        };

        let prompt = system_prompt(&context);

        assert!(prompt.contains("Recent average mood: 3.7/5"));
        assert!(prompt.contains("Personality: type 7"));
        assert!(prompt.contains("Tracked routines and habits: 4"));
    }

    #[test]
    fn test_prompt_marks_missing_context() {
        let prompt = system_prompt(&UserContext::default());

        assert!(prompt.contains("Recent average mood: not recorded"));
        assert!(prompt.contains("Personality: not defined"));
    }
}
