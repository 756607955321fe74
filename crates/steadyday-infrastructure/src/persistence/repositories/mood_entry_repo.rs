use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_day, parse_day};
use crate::persistence::SqliteRepositoryBase;
use steadyday_domain::mood::{MoodEntry, MoodEntryRepository, MoodVector};
use steadyday_domain::shared::{DayWindow, DomainError, MoodEntryId, UserId};

#[derive(FromRow)]
struct MoodEntryRow {
    id: String,
    owner_id: String,
    day: String,
    mood: String,
    energy: String,
    focus: String,
    notes: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl MoodEntryRow {
    fn try_into_entry(self) -> Result<MoodEntry, DomainError> {
        let vector = MoodVector::from_labels(&self.mood, &self.energy, &self.focus)?;

        Ok(MoodEntry::restore(
            MoodEntryId::from_string(&self.id),
            UserId::from_string(&self.owner_id),
            parse_day(&self.day)?,
            vector,
            self.notes,
            self.recorded_at,
        ))
    }
}

pub struct SqliteMoodEntryRepository {
    base: SqliteRepositoryBase,
}

impl SqliteMoodEntryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl MoodEntryRepository for SqliteMoodEntryRepository {
    async fn upsert(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO mood_entries (id, owner_id, day, mood, energy, focus, notes, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(owner_id, day) DO UPDATE SET
                mood = excluded.mood,
                energy = excluded.energy,
                focus = excluded.focus,
                notes = excluded.notes,
                recorded_at = excluded.recorded_at
        "#;

        let vector = entry.vector();
        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.id().as_str())
                    .bind(entry.owner_id().as_str())
                    .bind(format_day(entry.day()))
                    .bind(vector.mood.as_str())
                    .bind(vector.energy.as_str())
                    .bind(vector.focus.as_str())
                    .bind(entry.notes())
                    .bind(entry.recorded_at()),
                "Upsert mood entry",
            )
            .await?;

        Ok(())
    }

    async fn find_for_day(
        &self,
        owner_id: &UserId,
        day: NaiveDate,
    ) -> Result<Option<MoodEntry>, DomainError> {
        let query = r#"
            SELECT id, owner_id, day, mood, energy, focus, notes, recorded_at
            FROM mood_entries
            WHERE owner_id = ?1 AND day = ?2
        "#;

        let row: Option<MoodEntryRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(owner_id.as_str())
                    .bind(format_day(day)),
                "Find mood entry for day",
            )
            .await?;

        row.map(|r| r.try_into_entry()).transpose()
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<MoodEntry>, DomainError> {
        let query = r#"
            SELECT id, owner_id, day, mood, energy, focus, notes, recorded_at
            FROM mood_entries
            WHERE owner_id = ?1 AND day >= ?2 AND day <= ?3
            ORDER BY day DESC
        "#;

        let rows: Vec<MoodEntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(owner_id.as_str())
                    .bind(format_day(window.start()))
                    .bind(format_day(window.end())),
                "List mood entries in window",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_entry()).collect()
    }
}
