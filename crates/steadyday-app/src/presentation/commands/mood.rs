use chrono::NaiveDate;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::mood_commands::*;
use crate::application::dtos::{MoodEntryDto, MoodHistoryDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use steadyday_domain::mood::MoodVector;

/// Log (or replace) the day's mood check-in
pub async fn log_mood(
    state: &AppState,
    owner_id: &str,
    day: NaiveDate,
    vector: MoodVector,
    notes: Option<String>,
) -> Result<MoodEntryDto, CommandError> {
    let command = LogMoodCommand {
        owner_id: owner_id.to_string(),
        day,
        vector,
        notes,
    };

    let dto = state.command_handlers.log_mood.handle(command).await?;
    Ok(dto)
}

pub async fn get_mood_history(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
    days: Option<u32>,
) -> Result<MoodHistoryDto, CommandError> {
    let dto = state.queries.mood.mood_history(owner_id, today, days).await?;
    Ok(dto)
}
