use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::consistency_commands::*;
use steadyday_domain::consistency::CompletionEventRepository;
use steadyday_domain::shared::{DomainError, SubjectId, UserId};

/// Deletes every completion event of a removed routine or habit.
pub struct RemoveSubjectCommandHandler {
    event_repo: Arc<dyn CompletionEventRepository>,
}

impl RemoveSubjectCommandHandler {
    pub fn new(event_repo: Arc<dyn CompletionEventRepository>) -> Self {
        Self { event_repo }
    }
}

#[async_trait]
impl CommandHandler<RemoveSubjectCommand> for RemoveSubjectCommandHandler {
    type Result = RemoveSubjectResult;

    async fn handle(&self, cmd: RemoveSubjectCommand) -> Result<Self::Result, DomainError> {
        if cmd.owner_id.trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Removing a subject requires an owner".to_string(),
            ));
        }

        let removed = self
            .event_repo
            .delete_subject(
                &UserId::from_string(&cmd.owner_id),
                &SubjectId::from_string(&cmd.subject_id),
            )
            .await?;

        if removed == 0 {
            warn!(
                "[streak] remove_subject found no events owner_id={} subject_id={}",
                cmd.owner_id, cmd.subject_id
            );
            return Err(DomainError::SubjectNotFound(format!(
                "No reports recorded for subject {}",
                cmd.subject_id
            )));
        }

        info!(
            "[streak] removed subject owner_id={} subject_id={} events={}",
            cmd.owner_id, cmd.subject_id, removed
        );

        Ok(RemoveSubjectResult {
            subject_id: cmd.subject_id,
            removed_events: removed,
        })
    }
}
