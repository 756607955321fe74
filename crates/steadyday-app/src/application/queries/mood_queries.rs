use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{format_day, MoodEntryDto, MoodHistoryDto};
use steadyday_domain::mood::{average_mood_score, MoodEntryRepository};
use steadyday_domain::shared::{DayWindow, DomainError, UserId};

/// Default mood history window, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Window used for the mood average handed to the assistant.
pub const RECENT_MOOD_DAYS: u32 = 7;

pub struct MoodQueries {
    mood_repo: Arc<dyn MoodEntryRepository>,
}

impl MoodQueries {
    pub fn new(mood_repo: Arc<dyn MoodEntryRepository>) -> Self {
        Self { mood_repo }
    }

    pub async fn mood_history(
        &self,
        owner_id: &str,
        today: NaiveDate,
        days: Option<u32>,
    ) -> Result<MoodHistoryDto, DomainError> {
        let window = DayWindow::ending_at(today, days.unwrap_or(DEFAULT_HISTORY_DAYS))?;
        let entries = self
            .mood_repo
            .list_in_window(&UserId::from_string(owner_id), window)
            .await?;

        let average_mood = average_mood_score(&entries);
        info!(
            "[mood] history owner_id={} range={}~{} entries={} average={:?}",
            owner_id,
            window.start(),
            window.end(),
            entries.len(),
            average_mood
        );

        Ok(MoodHistoryDto {
            owner_id: owner_id.to_string(),
            start_date: format_day(window.start()),
            end_date: format_day(window.end()),
            entries: entries.iter().map(MoodEntryDto::from).collect(),
            average_mood,
        })
    }

    /// Mean mood score of the last week, if anything was logged.
    pub async fn recent_average(
        &self,
        owner_id: &str,
        today: NaiveDate,
    ) -> Result<Option<f64>, DomainError> {
        let window = DayWindow::ending_at(today, RECENT_MOOD_DAYS)?;
        let entries = self
            .mood_repo
            .list_in_window(&UserId::from_string(owner_id), window)
            .await?;
        Ok(average_mood_score(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MockMoodEntryRepository;
    use chrono::Duration;
    use steadyday_domain::mood::{EnergyLevel, FocusLevel, MoodEntry, MoodLevel, MoodVector};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    async fn log(repo: &MockMoodEntryRepository, days_ago: i64, mood: MoodLevel) {
        let vector = MoodVector::new(mood, EnergyLevel::Medium, FocusLevel::Medium);
        let entry = MoodEntry::new(
            UserId::from_string("user-1"),
            today() - Duration::days(days_ago),
            vector,
            None,
        )
        .unwrap();
        repo.upsert(&entry).await.unwrap();
    }

    #[tokio::test]
    async fn test_history_is_newest_first_with_average() {
        let repo = Arc::new(MockMoodEntryRepository::new());
        log(&repo, 2, MoodLevel::Low).await;
        log(&repo, 0, MoodLevel::Excellent).await;
        log(&repo, 1, MoodLevel::Good).await;
        let queries = MoodQueries::new(repo);

        let dto = queries.mood_history("user-1", today(), None).await.unwrap();

        let dates: Vec<&str> = dto.entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-15", "2024-06-14", "2024-06-13"]);
        assert_eq!(dto.average_mood, Some(3.7));
    }

    #[tokio::test]
    async fn test_empty_history_has_no_average() {
        let queries = MoodQueries::new(Arc::new(MockMoodEntryRepository::new()));

        let dto = queries.mood_history("user-1", today(), Some(7)).await.unwrap();

        assert!(dto.entries.is_empty());
        assert_eq!(dto.average_mood, None);
        assert_eq!(dto.start_date, "2024-06-09");
    }

    #[tokio::test]
    async fn test_recent_average_ignores_older_entries() {
        let repo = Arc::new(MockMoodEntryRepository::new());
        log(&repo, 0, MoodLevel::Good).await;
        log(&repo, 20, MoodLevel::VeryLow).await;
        let queries = MoodQueries::new(repo);

        let average = queries.recent_average("user-1", today()).await.unwrap();

        assert_eq!(average, Some(4.0));
    }
}
