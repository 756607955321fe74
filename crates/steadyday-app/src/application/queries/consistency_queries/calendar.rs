use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::collections::HashMap;

use crate::application::config::ConsistencyThresholds;
use crate::application::dtos::{format_day, CalendarDayDto, CalendarDto, MonthStatsDto};
use steadyday_domain::consistency::{CompletionEventRepository, CompletionRatio, SubjectKind};
use steadyday_domain::shared::{DayWindow, DomainError, SubjectId, UserId};

pub async fn get_calendar(
    event_repo: &dyn CompletionEventRepository,
    thresholds: &ConsistencyThresholds,
    owner_id: &str,
    subject_id: &str,
    kind: SubjectKind,
    year: i32,
    month: u32,
) -> Result<CalendarDto, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;
    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    let window = DayWindow::new(first_day, last_day)?;
    let events = event_repo
        .list_in_window(
            &UserId::from_string(owner_id),
            &SubjectId::from_string(subject_id),
            window,
        )
        .await?;

    let month_label = format!("{:04}-{:02}", year, month);
    if events.is_empty() {
        warn!(
            "[streak] calendar query empty result owner_id={} subject_id={} month={}",
            owner_id, subject_id, month_label
        );
    }

    let ratios: HashMap<NaiveDate, CompletionRatio> = events
        .iter()
        .map(|e| (e.day(), e.completion_ratio()))
        .collect();

    let threshold = thresholds.for_kind(kind);
    let mut days = Vec::with_capacity(window.len_days() as usize);
    let mut qualifying_days = 0u32;
    let mut ratio_sum = 0.0;

    for date in window.days() {
        let ratio = ratios.get(&date).copied();
        let qualifies = ratio.is_some_and(|r| r.meets(threshold));
        if qualifies {
            qualifying_days += 1;
        }
        if let Some(r) = ratio {
            ratio_sum += r.value();
        }

        days.push(CalendarDayDto {
            date: format_day(date),
            completion_ratio: ratio.map(|r| r.value()),
            qualifies,
        });
    }

    let total_days = last_day.day();
    let recorded_days = ratios.len() as u32;
    let month_stats = MonthStatsDto {
        total_days,
        recorded_days,
        qualifying_days,
        qualifying_rate: f64::from(qualifying_days) / f64::from(total_days) * 100.0,
        average_completion: if recorded_days > 0 {
            ratio_sum / f64::from(recorded_days) * 100.0
        } else {
            0.0
        },
    };

    info!(
        "[streak] calendar result owner_id={} subject_id={} month={} qualifying_days={} rate={:.2}%",
        owner_id, subject_id, month_label, month_stats.qualifying_days, month_stats.qualifying_rate
    );

    Ok(CalendarDto {
        owner_id: owner_id.to_string(),
        subject_id: subject_id.to_string(),
        kind,
        year,
        month,
        days,
        month_stats,
    })
}
