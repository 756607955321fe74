use async_trait::async_trait;

use super::{CompletionEvent, SubjectKind};
use crate::shared::{DayWindow, DomainError, SubjectId, UserId};

#[async_trait]
pub trait CompletionEventRepository: Send + Sync {
    /// Insert or replace the event for `(owner_id, subject_id, day)`.
    ///
    /// The stored row keeps its original id; ratio, notes and timestamp come
    /// from the newer report.
    async fn upsert(&self, event: &CompletionEvent) -> Result<(), DomainError>;

    /// Events of one subject within the window, ascending by day.
    async fn list_in_window(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
        window: DayWindow,
    ) -> Result<Vec<CompletionEvent>, DomainError>;

    /// Every event of one subject, ascending by day.
    async fn list_all(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<Vec<CompletionEvent>, DomainError>;

    /// Distinct subjects the owner has reported on, with the kind of the
    /// most recent report, ordered by subject id.
    async fn list_subjects(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<(SubjectId, SubjectKind)>, DomainError>;

    /// Remove every event of a subject. Returns the number of removed events.
    async fn delete_subject(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<u64, DomainError>;
}
