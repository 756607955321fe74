use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::mood_commands::*;
use crate::application::dtos::MoodEntryDto;
use steadyday_domain::mood::{MoodEntry, MoodEntryRepository};
use steadyday_domain::shared::{DomainError, UserId};

/// Stores (or replaces) the owner's mood check-in for the day.
pub struct LogMoodCommandHandler {
    mood_repo: Arc<dyn MoodEntryRepository>,
}

impl LogMoodCommandHandler {
    pub fn new(mood_repo: Arc<dyn MoodEntryRepository>) -> Self {
        Self { mood_repo }
    }
}

#[async_trait]
impl CommandHandler<LogMoodCommand> for LogMoodCommandHandler {
    type Result = LogMoodResult;

    async fn handle(&self, cmd: LogMoodCommand) -> Result<Self::Result, DomainError> {
        let entry = MoodEntry::new(
            UserId::from_string(&cmd.owner_id),
            cmd.day,
            cmd.vector,
            cmd.notes,
        )?;

        self.mood_repo.upsert(&entry).await?;

        info!(
            "[mood] logged owner_id={} day={} mood={} energy={} focus={}",
            cmd.owner_id, cmd.day, cmd.vector.mood, cmd.vector.energy, cmd.vector.focus
        );

        Ok(MoodEntryDto::from(&entry))
    }
}
