use chrono::NaiveDate;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::focus_commands::*;
use crate::application::dtos::{FocusRecommendationDto, FocusSessionDto, FocusStatsDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use steadyday_domain::focus::FocusSessionKind;

/// Focus and break lengths adapted to the day's mood
pub async fn recommend_focus_session(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
    base_minutes: Option<f64>,
) -> Result<FocusRecommendationDto, CommandError> {
    let dto = state
        .queries
        .focus
        .recommend_session(owner_id, today, base_minutes)
        .await?;
    Ok(dto)
}

/// Record a finished work or break period
pub async fn record_focus_session(
    state: &AppState,
    owner_id: &str,
    day: NaiveDate,
    kind: FocusSessionKind,
    duration_minutes: u32,
) -> Result<FocusSessionDto, CommandError> {
    let command = RecordFocusSessionCommand {
        owner_id: owner_id.to_string(),
        day,
        kind,
        duration_minutes,
    };

    let dto = state
        .command_handlers
        .record_focus_session
        .handle(command)
        .await?;
    Ok(dto)
}

pub async fn get_focus_stats(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
    days: Option<u32>,
) -> Result<FocusStatsDto, CommandError> {
    let dto = state.queries.focus.stats(owner_id, today, days).await?;
    Ok(dto)
}
