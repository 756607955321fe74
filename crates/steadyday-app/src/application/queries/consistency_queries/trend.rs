use chrono::NaiveDate;
use log::{info, warn};

use crate::application::config::ConsistencyThresholds;
use crate::application::dtos::{format_day, TrendDataPoint, TrendDto};
use steadyday_domain::consistency::{CompletionEventRepository, SubjectKind};
use steadyday_domain::shared::{DayWindow, DomainError, SubjectId, UserId};

pub async fn get_trend(
    event_repo: &dyn CompletionEventRepository,
    thresholds: &ConsistencyThresholds,
    owner_id: &str,
    subject_id: &str,
    kind: SubjectKind,
    today: NaiveDate,
    days: u32,
) -> Result<TrendDto, DomainError> {
    let window = DayWindow::ending_at(today, days)?;
    let events = event_repo
        .list_in_window(
            &UserId::from_string(owner_id),
            &SubjectId::from_string(subject_id),
            window,
        )
        .await?;

    info!(
        "[streak] trend query owner_id={} subject_id={} range={}~{} rows={}",
        owner_id,
        subject_id,
        window.start(),
        window.end(),
        events.len()
    );

    let threshold = thresholds.for_kind(kind);
    let data_points: Vec<TrendDataPoint> = events
        .iter()
        .map(|event| {
            let ratio = event.completion_ratio();
            TrendDataPoint {
                date: format_day(event.day()),
                completion_ratio: ratio.value(),
                completion_percent: (ratio.value() * 100.0).round() as u32,
                qualifies: ratio.meets(threshold),
            }
        })
        .collect();

    if data_points.is_empty() {
        warn!(
            "[streak] trend query empty owner_id={} subject_id={}",
            owner_id, subject_id
        );
    }

    Ok(TrendDto {
        owner_id: owner_id.to_string(),
        subject_id: subject_id.to_string(),
        kind,
        start_date: format_day(window.start()),
        end_date: format_day(window.end()),
        data_points,
    })
}
