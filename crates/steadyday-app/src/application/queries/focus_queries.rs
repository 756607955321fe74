use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{format_day, FocusRecommendationDto, FocusStatsDto};
use steadyday_domain::focus::{FocusSessionRepository, FocusStats};
use steadyday_domain::mood::{break_minutes, AdaptiveDurationMapper, MoodEntryRepository};
use steadyday_domain::shared::{DayWindow, DomainError, UserId};

/// Default window for session statistics, in days.
pub const DEFAULT_STATS_DAYS: u32 = 7;

/// Focus session recommendations driven by the day's mood check-in, and
/// totals over recorded sessions.
pub struct FocusQueries {
    mood_repo: Arc<dyn MoodEntryRepository>,
    session_repo: Arc<dyn FocusSessionRepository>,
    base_minutes: f64,
}

impl FocusQueries {
    pub fn new(
        mood_repo: Arc<dyn MoodEntryRepository>,
        session_repo: Arc<dyn FocusSessionRepository>,
        base_minutes: f64,
    ) -> Self {
        Self {
            mood_repo,
            session_repo,
            base_minutes,
        }
    }

    /// Adapts the base duration to today's mood entry. Without one the base
    /// is used as is.
    pub async fn recommend_session(
        &self,
        owner_id: &str,
        today: NaiveDate,
        base_minutes: Option<f64>,
    ) -> Result<FocusRecommendationDto, DomainError> {
        let base = base_minutes.unwrap_or(self.base_minutes);
        let mapper = AdaptiveDurationMapper::new(base)?;

        let entry = self
            .mood_repo
            .find_for_day(&UserId::from_string(owner_id), today)
            .await?;

        let (work_minutes, mood) = match entry {
            Some(entry) => {
                let vector = entry.vector();
                (mapper.recommend(&vector), Some(vector))
            }
            None => (base.round() as u32, None),
        };

        let dto = FocusRecommendationDto {
            date: format_day(today),
            base_minutes: base,
            work_minutes,
            break_minutes: break_minutes(work_minutes),
            adapted: mood.is_some(),
            mood,
        };

        info!(
            "[focus] recommend owner_id={} day={} base={} work={} break={} adapted={}",
            owner_id, today, base, dto.work_minutes, dto.break_minutes, dto.adapted
        );

        Ok(dto)
    }

    pub async fn stats(
        &self,
        owner_id: &str,
        today: NaiveDate,
        days: Option<u32>,
    ) -> Result<FocusStatsDto, DomainError> {
        let window = DayWindow::ending_at(today, days.unwrap_or(DEFAULT_STATS_DAYS))?;
        let sessions = self
            .session_repo
            .list_in_window(&UserId::from_string(owner_id), window)
            .await?;

        let stats = FocusStats::summarize(&sessions);
        info!(
            "[focus] stats owner_id={} range={}~{} sessions={} minutes={} work={}",
            owner_id,
            window.start(),
            window.end(),
            stats.total_sessions,
            stats.total_minutes,
            stats.work_sessions
        );

        Ok(FocusStatsDto::new(window.start(), window.end(), stats))
    }
}
