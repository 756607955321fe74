use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_day, parse_day};
use crate::persistence::SqliteRepositoryBase;
use steadyday_domain::consistency::{
    CompletionEvent, CompletionEventRepository, CompletionRatio, SubjectKind,
};
use steadyday_domain::shared::{DayWindow, DomainError, EventId, SubjectId, UserId};

#[derive(FromRow)]
struct SubjectRow {
    subject_id: String,
    subject_kind: String,
}

#[derive(FromRow)]
struct CompletionEventRow {
    id: String,
    subject_id: String,
    subject_kind: String,
    owner_id: String,
    day: String,
    completion_ratio: f64,
    notes: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl CompletionEventRow {
    fn try_into_event(self) -> Result<CompletionEvent, DomainError> {
        let subject_kind: SubjectKind = self.subject_kind.parse()?;
        let completion_ratio = CompletionRatio::new(self.completion_ratio).map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Stored ratio for event {} is invalid: {}",
                self.id,
                e.message()
            ))
        })?;

        Ok(CompletionEvent::restore(
            EventId::from_string(&self.id),
            SubjectId::from_string(&self.subject_id),
            subject_kind,
            UserId::from_string(&self.owner_id),
            parse_day(&self.day)?,
            completion_ratio,
            self.notes,
            self.recorded_at,
        ))
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, subject_id, subject_kind, owner_id, day, completion_ratio, notes, recorded_at
    FROM completion_events
"#;

pub struct SqliteCompletionEventRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCompletionEventRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CompletionEventRepository for SqliteCompletionEventRepository {
    async fn upsert(&self, event: &CompletionEvent) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO completion_events (
                id,
                subject_id,
                subject_kind,
                owner_id,
                day,
                completion_ratio,
                notes,
                recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(owner_id, subject_id, day) DO UPDATE SET
                subject_kind = excluded.subject_kind,
                completion_ratio = excluded.completion_ratio,
                notes = excluded.notes,
                recorded_at = excluded.recorded_at
        "#;

        self
            .base
            .execute(
                sqlx::query(query)
                    .bind(event.id().as_str())
                    .bind(event.subject_id().as_str())
                    .bind(event.subject_kind().as_str())
                    .bind(event.owner_id().as_str())
                    .bind(format_day(event.day()))
                    .bind(event.completion_ratio().value())
                    .bind(event.notes())
                    .bind(event.recorded_at()),
                "Upsert completion event",
            )
            .await?;

        Ok(())
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
        window: DayWindow,
    ) -> Result<Vec<CompletionEvent>, DomainError> {
        let query = format!(
            "{SELECT_COLUMNS} WHERE owner_id = ?1 AND subject_id = ?2 AND day >= ?3 AND day <= ?4 ORDER BY day ASC"
        );

        let rows: Vec<CompletionEventRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(owner_id.as_str())
                    .bind(subject_id.as_str())
                    .bind(format_day(window.start()))
                    .bind(format_day(window.end())),
                "List completion events in window",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_event()).collect()
    }

    async fn list_all(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<Vec<CompletionEvent>, DomainError> {
        let query =
            format!("{SELECT_COLUMNS} WHERE owner_id = ?1 AND subject_id = ?2 ORDER BY day ASC");

        let rows: Vec<CompletionEventRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(owner_id.as_str())
                    .bind(subject_id.as_str()),
                "List completion events",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_event()).collect()
    }

    async fn list_subjects(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<(SubjectId, SubjectKind)>, DomainError> {
        // SQLite returns the bare subject_kind from the row holding MAX(day).
        let query = r#"
            SELECT subject_id, subject_kind, MAX(day) AS last_day
            FROM completion_events
            WHERE owner_id = ?1
            GROUP BY subject_id
            ORDER BY subject_id ASC
        "#;

        let rows: Vec<SubjectRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(owner_id.as_str()),
                "List subjects",
            )
            .await?;

        rows.into_iter()
            .map(|r| {
                let kind: SubjectKind = r.subject_kind.parse()?;
                Ok((SubjectId::from_string(&r.subject_id), kind))
            })
            .collect()
    }

    async fn delete_subject(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<u64, DomainError> {
        let query = "DELETE FROM completion_events WHERE owner_id = ?1 AND subject_id = ?2";

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(owner_id.as_str())
                    .bind(subject_id.as_str()),
                "Delete subject completion events",
            )
            .await?;

        Ok(result.rows_affected())
    }
}
