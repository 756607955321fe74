use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::focus_commands::*;
use crate::application::dtos::FocusSessionDto;
use steadyday_domain::focus::{FocusSession, FocusSessionRepository};
use steadyday_domain::shared::{DomainError, UserId};

/// Stores a finished work or break period.
pub struct RecordFocusSessionCommandHandler {
    session_repo: Arc<dyn FocusSessionRepository>,
}

impl RecordFocusSessionCommandHandler {
    pub fn new(session_repo: Arc<dyn FocusSessionRepository>) -> Self {
        Self { session_repo }
    }
}

#[async_trait]
impl CommandHandler<RecordFocusSessionCommand> for RecordFocusSessionCommandHandler {
    type Result = RecordFocusSessionResult;

    async fn handle(&self, cmd: RecordFocusSessionCommand) -> Result<Self::Result, DomainError> {
        let session = FocusSession::new(
            UserId::from_string(&cmd.owner_id),
            cmd.kind,
            cmd.duration_minutes,
            cmd.day,
        )?;

        self.session_repo.insert(&session).await?;

        info!(
            "[focus] session recorded owner_id={} day={} kind={} minutes={}",
            cmd.owner_id, cmd.day, cmd.kind, cmd.duration_minutes
        );

        Ok(FocusSessionDto::from(&session))
    }
}
