use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::ConsistencyThresholds;
use crate::application::dtos::{CalendarDto, StreakDto, SubjectSummaryDto, TrendDto};
use steadyday_domain::consistency::{CompletionEventRepository, SubjectKind};
use steadyday_domain::shared::{DomainError, SubjectId, UserId};

mod calendar;
mod streak;
mod trend;

pub use streak::RECENT_EVENTS_LIMIT;

/// Default streak window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

pub struct ConsistencyQueries {
    event_repo: Arc<dyn CompletionEventRepository>,
    thresholds: ConsistencyThresholds,
}

impl ConsistencyQueries {
    pub fn new(
        event_repo: Arc<dyn CompletionEventRepository>,
        thresholds: ConsistencyThresholds,
    ) -> Self {
        Self {
            event_repo,
            thresholds,
        }
    }

    /// The requested kind, else the kind of the subject's latest report.
    /// Subjects without reports are treated as routines.
    pub async fn resolve_kind(
        &self,
        owner_id: &str,
        subject_id: &str,
        requested: Option<SubjectKind>,
    ) -> Result<SubjectKind, DomainError> {
        if let Some(kind) = requested {
            return Ok(kind);
        }

        let subject = SubjectId::from_string(subject_id);
        let stored = self
            .event_repo
            .list_subjects(&UserId::from_string(owner_id))
            .await?
            .into_iter()
            .find(|(id, _)| *id == subject)
            .map(|(_, kind)| kind);

        Ok(stored.unwrap_or(SubjectKind::Routine))
    }

    /// Streak and completion rate over the last `window_days` days
    pub async fn get_streak(
        &self,
        owner_id: &str,
        subject_id: &str,
        kind: SubjectKind,
        today: NaiveDate,
        window_days: Option<u32>,
    ) -> Result<StreakDto, DomainError> {
        streak::get_streak(
            self.event_repo.as_ref(),
            &self.thresholds,
            owner_id,
            subject_id,
            kind,
            today,
            window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
        )
        .await
    }

    /// Current streak of every subject the owner tracks
    pub async fn get_all_streaks(
        &self,
        owner_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<SubjectSummaryDto>, DomainError> {
        streak::get_all_streaks(self.event_repo.as_ref(), &self.thresholds, owner_id, today)
            .await
    }

    /// Per-day completion for one calendar month
    pub async fn get_calendar(
        &self,
        owner_id: &str,
        subject_id: &str,
        kind: SubjectKind,
        year: i32,
        month: u32,
    ) -> Result<CalendarDto, DomainError> {
        calendar::get_calendar(
            self.event_repo.as_ref(),
            &self.thresholds,
            owner_id,
            subject_id,
            kind,
            year,
            month,
        )
        .await
    }

    /// Recorded days over the last `days` days
    pub async fn get_trend(
        &self,
        owner_id: &str,
        subject_id: &str,
        kind: SubjectKind,
        today: NaiveDate,
        days: u32,
    ) -> Result<TrendDto, DomainError> {
        trend::get_trend(
            self.event_repo.as_ref(),
            &self.thresholds,
            owner_id,
            subject_id,
            kind,
            today,
            days,
        )
        .await
    }
}
