use async_trait::async_trait;
use chrono::NaiveDate;

use super::MoodEntry;
use crate::shared::{DayWindow, DomainError, UserId};

#[async_trait]
pub trait MoodEntryRepository: Send + Sync {
    /// Insert or replace the owner's entry for the entry's day.
    async fn upsert(&self, entry: &MoodEntry) -> Result<(), DomainError>;

    async fn find_for_day(
        &self,
        owner_id: &UserId,
        day: NaiveDate,
    ) -> Result<Option<MoodEntry>, DomainError>;

    /// Entries within the window, newest first.
    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<MoodEntry>, DomainError>;
}
