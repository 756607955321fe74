use chrono::NaiveDate;

use crate::application::dtos::AssistantReplyDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use steadyday_domain::assistant::{ChatTopic, UserContext};
use steadyday_domain::personality::PersonalityType;

/// Ask the assistant; the user context is assembled from stored data.
/// `personality_override` replaces the stored questionnaire result.
pub async fn ask_assistant(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
    message: &str,
    topic: ChatTopic,
    personality_override: Option<PersonalityType>,
) -> Result<AssistantReplyDto, CommandError> {
    let context = build_user_context(state, owner_id, today, personality_override).await?;

    Ok(state
        .services
        .assistant
        .reply(message, topic, &context)
        .await)
}

pub async fn build_user_context(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
    personality_override: Option<PersonalityType>,
) -> Result<UserContext, CommandError> {
    let personality_type = match personality_override {
        Some(personality_type) => Some(personality_type),
        None => state.queries.personality.stored_type(owner_id).await?,
    };
    let recent_mood_average = state.queries.mood.recent_average(owner_id, today).await?;
    let summaries = state
        .queries
        .consistency
        .get_all_streaks(owner_id, today)
        .await?;

    Ok(UserContext {
        recent_mood_average,
        personality_type,
        tracked_subjects: summaries.len() as u32,
        active_streaks: summaries.iter().filter(|s| s.current_streak > 0).count() as u32,
    })
}
