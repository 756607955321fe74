use async_trait::async_trait;

use super::FocusSession;
use crate::shared::{DayWindow, DomainError, UserId};

#[async_trait]
pub trait FocusSessionRepository: Send + Sync {
    async fn insert(&self, session: &FocusSession) -> Result<(), DomainError>;

    /// Sessions completed within the window, newest first.
    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<FocusSession>, DomainError>;
}
