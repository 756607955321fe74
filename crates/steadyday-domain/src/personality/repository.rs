use async_trait::async_trait;

use super::PersonalityResult;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait PersonalityResultRepository: Send + Sync {
    /// Insert or replace the owner's stored result.
    async fn upsert(&self, result: &PersonalityResult) -> Result<(), DomainError>;

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<PersonalityResult>, DomainError>;
}
