use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

use steadyday_domain::shared::DomainError;

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;
type SqliteQueryAs<'q, T> = sqlx::query::QueryAs<'q, Sqlite, T, SqliteArguments<'q>>;

/// Shared pool handle for SQLite repositories.
///
/// Every call takes a short operation name that ends up in the
/// `DomainError::Repository` message when the query fails.
#[derive(Clone)]
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: SqliteQuery<'q>,
        operation: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: SqliteQueryAs<'q, T>,
        operation: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: SqliteQueryAs<'q, T>,
        operation: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }
}

pub(crate) fn map_sqlx_error(error: sqlx::Error, operation: &str) -> DomainError {
    match error {
        sqlx::Error::RowNotFound => DomainError::NotFound(format!("{}: row not found", operation)),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::DataIntegrity(format!("{}: {}", operation, db.message()))
        }
        other => DomainError::Repository(format!("{}: {}", operation, other)),
    }
}
