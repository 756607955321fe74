use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::{CompletionEvent, SubjectKind};
use crate::shared::{DayWindow, SubjectId, UserId};

/// Outcome of writing one report into the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Completion events keyed by `(owner, subject, day)`.
///
/// Holds the upsert invariant in memory; storage backends mirror the same
/// rule with a unique key.
#[derive(Debug, Default, Clone)]
pub struct CompletionLog {
    events: BTreeMap<(UserId, SubjectId, NaiveDate), CompletionEvent>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, event: CompletionEvent) -> UpsertOutcome {
        let key = (
            event.owner_id().clone(),
            event.subject_id().clone(),
            event.day(),
        );
        match self.events.get_mut(&key) {
            Some(existing) => {
                existing.supersede_with(&event);
                UpsertOutcome::Replaced
            }
            None => {
                self.events.insert(key, event);
                UpsertOutcome::Inserted
            }
        }
    }

    pub fn get(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
        day: NaiveDate,
    ) -> Option<&CompletionEvent> {
        self.events.get(&(owner_id.clone(), subject_id.clone(), day))
    }

    /// Events of one owner's subject inside the window, ascending by day.
    pub fn in_window(
        &self,
        owner_id: &UserId,
        subject_id: &SubjectId,
        window: DayWindow,
    ) -> Vec<CompletionEvent> {
        let from = (owner_id.clone(), subject_id.clone(), window.start());
        let to = (owner_id.clone(), subject_id.clone(), window.end());
        self.events
            .range(from..=to)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Every event of one owner's subject, ascending by day.
    pub fn all_for(&self, owner_id: &UserId, subject_id: &SubjectId) -> Vec<CompletionEvent> {
        self.events
            .iter()
            .filter(|((owner, subject, _), _)| owner == owner_id && subject == subject_id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Distinct subjects of one owner with the kind of their latest event.
    pub fn subjects_for(&self, owner_id: &UserId) -> Vec<(SubjectId, SubjectKind)> {
        let mut subjects: Vec<(SubjectId, SubjectKind)> = Vec::new();
        for ((owner, subject, _), event) in &self.events {
            if owner != owner_id {
                continue;
            }
            // Keys are ordered by (owner, subject, day), so the last write per
            // subject is its latest day.
            match subjects.last_mut() {
                Some((last, kind)) if last == subject => *kind = event.subject_kind(),
                _ => subjects.push((subject.clone(), event.subject_kind())),
            }
        }
        subjects
    }

    pub fn remove_subject(&mut self, owner_id: &UserId, subject_id: &SubjectId) -> u64 {
        let before = self.events.len();
        self.events
            .retain(|(owner, subject, _), _| !(owner == owner_id && subject == subject_id));
        (before - self.events.len()) as u64
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
