use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::consistency_commands::*;
use crate::application::config::ConsistencyThresholds;
use steadyday_domain::consistency::{CompletionEvent, CompletionEventRepository};
use steadyday_domain::shared::{DomainError, SubjectId, UserId};

/// Stores the day's completion report for a routine or habit.
pub struct RecordCompletionCommandHandler {
    event_repo: Arc<dyn CompletionEventRepository>,
    thresholds: ConsistencyThresholds,
}

impl RecordCompletionCommandHandler {
    pub fn new(
        event_repo: Arc<dyn CompletionEventRepository>,
        thresholds: ConsistencyThresholds,
    ) -> Self {
        Self {
            event_repo,
            thresholds,
        }
    }
}

#[async_trait]
impl CommandHandler<RecordCompletionCommand> for RecordCompletionCommandHandler {
    type Result = RecordCompletionResult;

    async fn handle(&self, cmd: RecordCompletionCommand) -> Result<Self::Result, DomainError> {
        let ratio = cmd.report.to_ratio()?;
        let event = CompletionEvent::new(
            SubjectId::from_string(&cmd.subject_id),
            cmd.kind,
            UserId::from_string(&cmd.owner_id),
            cmd.day,
            ratio,
            cmd.notes,
        )?;

        self.event_repo.upsert(&event).await?;

        let qualifies = ratio.meets(self.thresholds.for_kind(cmd.kind));
        info!(
            "[streak] recorded completion owner_id={} subject_id={} kind={} day={} ratio={:.2} qualifies={}",
            cmd.owner_id,
            cmd.subject_id,
            cmd.kind,
            cmd.day,
            ratio.value(),
            qualifies
        );

        Ok(RecordCompletionResult {
            subject_id: cmd.subject_id,
            day: cmd.day.format("%Y-%m-%d").to_string(),
            completion_ratio: ratio.value(),
            qualifies,
        })
    }
}
