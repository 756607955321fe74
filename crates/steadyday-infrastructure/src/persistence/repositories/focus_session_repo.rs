use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_day, parse_day};
use crate::persistence::{ResultExt, SqliteRepositoryBase};
use steadyday_domain::focus::{FocusSession, FocusSessionRepository};
use steadyday_domain::shared::{DayWindow, DomainError, FocusSessionId, UserId};

#[derive(FromRow)]
struct FocusSessionRow {
    id: String,
    owner_id: String,
    kind: String,
    duration_minutes: i64,
    day: String,
    completed_at: DateTime<Utc>,
}

impl FocusSessionRow {
    fn try_into_session(self) -> Result<FocusSession, DomainError> {
        let duration_minutes =
            u32::try_from(self.duration_minutes).to_serialization_err("session length")?;

        Ok(FocusSession::restore(
            FocusSessionId::from_string(&self.id),
            UserId::from_string(&self.owner_id),
            self.kind.parse()?,
            duration_minutes,
            parse_day(&self.day)?,
            self.completed_at,
        ))
    }
}

pub struct SqliteFocusSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteFocusSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl FocusSessionRepository for SqliteFocusSessionRepository {
    async fn insert(&self, session: &FocusSession) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO focus_sessions (id, owner_id, kind, duration_minutes, day, completed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.id().as_str())
                    .bind(session.owner_id().as_str())
                    .bind(session.kind().as_str())
                    .bind(i64::from(session.duration_minutes()))
                    .bind(format_day(session.day()))
                    .bind(session.completed_at()),
                "Insert focus session",
            )
            .await?;

        Ok(())
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<FocusSession>, DomainError> {
        let query = r#"
            SELECT id, owner_id, kind, duration_minutes, day, completed_at
            FROM focus_sessions
            WHERE owner_id = ?1 AND day >= ?2 AND day <= ?3
            ORDER BY day DESC, completed_at DESC
        "#;

        let rows: Vec<FocusSessionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(owner_id.as_str())
                    .bind(format_day(window.start()))
                    .bind(format_day(window.end())),
                "List focus sessions in window",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_session()).collect()
    }
}
