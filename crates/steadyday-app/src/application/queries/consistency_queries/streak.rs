use chrono::NaiveDate;
use log::{info, warn};

use super::DEFAULT_WINDOW_DAYS;
use crate::application::config::ConsistencyThresholds;
use crate::application::dtos::{format_day, CompletionEventDto, StreakDto, SubjectSummaryDto};
use steadyday_domain::consistency::{CompletionEventRepository, SubjectKind};
use steadyday_domain::shared::{DayWindow, DomainError, SubjectId, UserId};

/// Number of most recent events returned with a streak.
pub const RECENT_EVENTS_LIMIT: usize = 7;

pub async fn get_streak(
    event_repo: &dyn CompletionEventRepository,
    thresholds: &ConsistencyThresholds,
    owner_id: &str,
    subject_id: &str,
    kind: SubjectKind,
    today: NaiveDate,
    window_days: u32,
) -> Result<StreakDto, DomainError> {
    let window = DayWindow::ending_at(today, window_days)?;
    let events = event_repo
        .list_in_window(
            &UserId::from_string(owner_id),
            &SubjectId::from_string(subject_id),
            window,
        )
        .await?;

    if events.is_empty() {
        warn!(
            "[streak] no events in window owner_id={} subject_id={} window={}~{}",
            owner_id,
            subject_id,
            window.start(),
            window.end()
        );
    }

    let threshold = thresholds.for_kind(kind);
    let result = thresholds.calculator(kind).calculate(&events, today)?;

    let skip = events.len().saturating_sub(RECENT_EVENTS_LIMIT);
    let recent_events = events
        .iter()
        .skip(skip)
        .map(|e| CompletionEventDto::from_event(e, threshold))
        .collect();

    let dto = StreakDto {
        owner_id: owner_id.to_string(),
        subject_id: subject_id.to_string(),
        kind,
        threshold: threshold.value(),
        window_start: format_day(window.start()),
        window_end: format_day(window.end()),
        current_streak: result.current_streak,
        longest_streak: result.longest_streak,
        qualifying_days: result.qualifying_days,
        total_executions: result.total_executions,
        completion_rate: result.completion_rate_rounded(),
        completion_rate_exact: result.completion_rate,
        recent_events,
    };

    info!(
        "[streak] get_streak owner_id={} subject_id={} current={} longest={} rate={:.2}% total={}",
        owner_id,
        subject_id,
        dto.current_streak,
        dto.longest_streak,
        dto.completion_rate_exact,
        dto.total_executions
    );

    Ok(dto)
}

pub async fn get_all_streaks(
    event_repo: &dyn CompletionEventRepository,
    thresholds: &ConsistencyThresholds,
    owner_id: &str,
    today: NaiveDate,
) -> Result<Vec<SubjectSummaryDto>, DomainError> {
    let owner = UserId::from_string(owner_id);
    let window = DayWindow::ending_at(today, DEFAULT_WINDOW_DAYS)?;
    let subjects = event_repo.list_subjects(&owner).await?;

    let mut results = Vec::with_capacity(subjects.len());
    for (subject_id, kind) in subjects {
        let events = event_repo
            .list_in_window(&owner, &subject_id, window)
            .await?;
        let result = thresholds.calculator(kind).calculate(&events, today)?;

        results.push(SubjectSummaryDto {
            subject_id: subject_id.to_string(),
            kind,
            current_streak: result.current_streak,
            completion_rate: result.completion_rate_rounded(),
        });
    }

    results.sort_by(|a, b| b.current_streak.cmp(&a.current_streak));

    info!(
        "[streak] get_all_streaks owner_id={} subjects={}",
        owner_id,
        results.len()
    );
    Ok(results)
}
