use async_trait::async_trait;
use tokio::sync::RwLock;

use steadyday_domain::consistency::{
    CompletionEvent, CompletionEventRepository, CompletionLog, SubjectKind,
};
use steadyday_domain::shared::{DayWindow, DomainError, SubjectId, UserId};

/// Process-local event store backed by a [`CompletionLog`].
#[derive(Default)]
pub struct InMemoryCompletionEventRepository {
    log: RwLock<CompletionLog>,
}

impl InMemoryCompletionEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionEventRepository for InMemoryCompletionEventRepository {
    async fn upsert(&self, event: &CompletionEvent) -> Result<(), DomainError> {
        self.log.write().await.upsert(event.clone());
        Ok(())
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
        window: DayWindow,
    ) -> Result<Vec<CompletionEvent>, DomainError> {
        Ok(self.log.read().await.in_window(owner_id, subject_id, window))
    }

    async fn list_all(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<Vec<CompletionEvent>, DomainError> {
        Ok(self.log.read().await.all_for(owner_id, subject_id))
    }

    async fn list_subjects(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<(SubjectId, SubjectKind)>, DomainError> {
        Ok(self.log.read().await.subjects_for(owner_id))
    }

    async fn delete_subject(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
    ) -> Result<u64, DomainError> {
        Ok(self.log.write().await.remove_subject(owner_id, subject_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use steadyday_domain::consistency::CompletionRatio;

    fn event(owner: &str, value: f64) -> CompletionEvent {
        CompletionEvent::new(
            SubjectId::from_string("reading"),
            SubjectKind::Habit,
            UserId::from_string(owner),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            CompletionRatio::new(value).unwrap(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_day() {
        let repo = InMemoryCompletionEventRepository::new();
        repo.upsert(&event("u1", 0.0)).await.unwrap();
        repo.upsert(&event("u1", 1.0)).await.unwrap();

        let all = repo
            .list_all(&UserId::from_string("u1"), &SubjectId::from_string("reading"))
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].completion_ratio(), CompletionRatio::FULL);
    }

    #[tokio::test]
    async fn test_other_owner_keeps_own_report() {
        let repo = InMemoryCompletionEventRepository::new();
        repo.upsert(&event("u1", 1.0)).await.unwrap();
        repo.upsert(&event("u2", 0.0)).await.unwrap();

        let subject = SubjectId::from_string("reading");
        let first = repo
            .list_all(&UserId::from_string("u1"), &subject)
            .await
            .unwrap();
        let second = repo
            .list_all(&UserId::from_string("u2"), &subject)
            .await
            .unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].completion_ratio(), CompletionRatio::FULL);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].completion_ratio(), CompletionRatio::NONE);
    }
}
