use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use steadyday_domain::focus::{FocusSession, FocusSessionRepository};
use steadyday_domain::mood::{MoodEntry, MoodEntryRepository};
use steadyday_domain::personality::{PersonalityResult, PersonalityResultRepository};
use steadyday_domain::shared::{DayWindow, DomainError, UserId};

// In-memory stores shared by handler and query tests

pub(crate) struct MockMoodEntryRepository {
    entries: RwLock<HashMap<(String, NaiveDate), MoodEntry>>,
}

impl MockMoodEntryRepository {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl MoodEntryRepository for MockMoodEntryRepository {
    async fn upsert(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            (entry.owner_id().as_str().to_string(), entry.day()),
            entry.clone(),
        );
        Ok(())
    }

    async fn find_for_day(
        &self,
        owner_id: &UserId,
        day: NaiveDate,
    ) -> Result<Option<MoodEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(owner_id.as_str().to_string(), day)).cloned())
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<MoodEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut found: Vec<MoodEntry> = entries
            .values()
            .filter(|e| e.owner_id() == owner_id && window.contains(e.day()))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.day().cmp(&a.day()));
        Ok(found)
    }
}

pub(crate) struct MockFocusSessionRepository {
    sessions: RwLock<Vec<FocusSession>>,
}

impl MockFocusSessionRepository {
    pub(crate) fn new() -> Self {
        Self {
            sessions: RwLock::new(Vec::new()),
        }
    }

    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl FocusSessionRepository for MockFocusSessionRepository {
    async fn insert(&self, session: &FocusSession) -> Result<(), DomainError> {
        self.sessions.write().await.push(session.clone());
        Ok(())
    }

    async fn list_in_window(
        &self,
        owner_id: &UserId,
        window: DayWindow,
    ) -> Result<Vec<FocusSession>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut found: Vec<FocusSession> = sessions
            .iter()
            .filter(|s| s.owner_id() == owner_id && window.contains(s.day()))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.day().cmp(&a.day()));
        Ok(found)
    }
}

pub(crate) struct MockPersonalityResultRepository {
    results: RwLock<HashMap<String, PersonalityResult>>,
}

impl MockPersonalityResultRepository {
    pub(crate) fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PersonalityResultRepository for MockPersonalityResultRepository {
    async fn upsert(&self, result: &PersonalityResult) -> Result<(), DomainError> {
        self.results
            .write()
            .await
            .insert(result.owner_id().as_str().to_string(), result.clone());
        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<PersonalityResult>, DomainError> {
        Ok(self.results.read().await.get(owner_id.as_str()).cloned())
    }
}
