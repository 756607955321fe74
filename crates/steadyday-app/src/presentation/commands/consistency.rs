use chrono::NaiveDate;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::consistency_commands::*;
use crate::application::dtos::{CalendarDto, StreakDto, SubjectSummaryDto, TrendDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use steadyday_domain::consistency::SubjectKind;

/// Record the day's completion of a routine or habit
pub async fn record_completion(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
    kind: SubjectKind,
    day: NaiveDate,
    report: CompletionReport,
    notes: Option<String>,
) -> Result<RecordCompletionResult, CommandError> {
    let command = RecordCompletionCommand {
        owner_id: owner_id.to_string(),
        subject_id: subject_id.to_string(),
        kind,
        day,
        report,
        notes,
    };

    let result = state
        .command_handlers
        .record_completion
        .handle(command)
        .await?;
    Ok(result)
}

/// Delete every recorded day of a subject
pub async fn remove_subject(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
) -> Result<RemoveSubjectResult, CommandError> {
    let command = RemoveSubjectCommand {
        owner_id: owner_id.to_string(),
        subject_id: subject_id.to_string(),
    };

    let result = state.command_handlers.remove_subject.handle(command).await?;
    Ok(result)
}

/// Without an explicit kind the subject's stored kind is used
pub async fn get_streak(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
    kind: Option<SubjectKind>,
    today: NaiveDate,
    window_days: Option<u32>,
) -> Result<StreakDto, CommandError> {
    let kind = resolve_kind(state, owner_id, subject_id, kind).await?;
    let dto = state
        .queries
        .consistency
        .get_streak(owner_id, subject_id, kind, today, window_days)
        .await?;
    Ok(dto)
}

pub async fn get_all_streaks(
    state: &AppState,
    owner_id: &str,
    today: NaiveDate,
) -> Result<Vec<SubjectSummaryDto>, CommandError> {
    let summaries = state
        .queries
        .consistency
        .get_all_streaks(owner_id, today)
        .await?;
    Ok(summaries)
}

pub async fn get_calendar(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
    kind: Option<SubjectKind>,
    year: i32,
    month: u32,
) -> Result<CalendarDto, CommandError> {
    let kind = resolve_kind(state, owner_id, subject_id, kind).await?;
    let dto = state
        .queries
        .consistency
        .get_calendar(owner_id, subject_id, kind, year, month)
        .await?;
    Ok(dto)
}

pub async fn get_trend(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
    kind: Option<SubjectKind>,
    today: NaiveDate,
    days: u32,
) -> Result<TrendDto, CommandError> {
    let kind = resolve_kind(state, owner_id, subject_id, kind).await?;
    let dto = state
        .queries
        .consistency
        .get_trend(owner_id, subject_id, kind, today, days)
        .await?;
    Ok(dto)
}

async fn resolve_kind(
    state: &AppState,
    owner_id: &str,
    subject_id: &str,
    kind: Option<SubjectKind>,
) -> Result<SubjectKind, CommandError> {
    let kind = state
        .queries
        .consistency
        .resolve_kind(owner_id, subject_id, kind)
        .await?;
    Ok(kind)
}
