use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{DomainError, EventId, SubjectId, UserId};

/// Kind of tracked subject. Selects the default qualifying threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// Multi-step routine, reported as a fraction of completed steps.
    Routine,
    /// Binary habit, reported as done / not done.
    Habit,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Routine => "routine",
            SubjectKind::Habit => "habit",
        }
    }

    pub fn default_threshold(&self) -> QualifyingThreshold {
        match self {
            SubjectKind::Routine => QualifyingThreshold::ROUTINE,
            SubjectKind::Habit => QualifyingThreshold::HABIT,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "routine" => Ok(SubjectKind::Routine),
            "habit" => Ok(SubjectKind::Habit),
            other => Err(DomainError::Validation(format!(
                "Unknown subject kind: {}",
                other
            ))),
        }
    }
}

/// Fraction of a subject completed on one day, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompletionRatio(f64);

impl CompletionRatio {
    pub const NONE: CompletionRatio = CompletionRatio(0.0);
    pub const FULL: CompletionRatio = CompletionRatio(1.0);

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::Validation(format!(
                "Completion ratio must be within [0, 1], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Binary habits count as all or nothing.
    pub fn from_done(done: bool) -> Self {
        if done {
            Self::FULL
        } else {
            Self::NONE
        }
    }

    /// Ratio of completed steps. A subject without steps is 0, not an error.
    pub fn from_steps(completed: u32, total: u32) -> Result<Self, DomainError> {
        if total == 0 {
            return Ok(Self::NONE);
        }
        if completed > total {
            return Err(DomainError::Validation(format!(
                "Completed steps ({}) exceed total steps ({})",
                completed, total
            )));
        }
        Ok(Self(f64::from(completed) / f64::from(total)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn meets(&self, threshold: QualifyingThreshold) -> bool {
        self.0 >= threshold.value()
    }
}

impl TryFrom<f64> for CompletionRatio {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompletionRatio> for f64 {
    fn from(ratio: CompletionRatio) -> Self {
        ratio.0
    }
}

/// Minimum ratio for a day to count toward a streak.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct QualifyingThreshold(f64);

impl QualifyingThreshold {
    pub const ROUTINE: QualifyingThreshold = QualifyingThreshold(0.70);
    pub const HABIT: QualifyingThreshold = QualifyingThreshold(1.0);

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(DomainError::Validation(format!(
                "Qualifying threshold must be within (0, 1], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for QualifyingThreshold {
    fn default() -> Self {
        Self::ROUTINE
    }
}

impl TryFrom<f64> for QualifyingThreshold {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QualifyingThreshold> for f64 {
    fn from(threshold: QualifyingThreshold) -> Self {
        threshold.0
    }
}

/// One dated completion report for a subject.
///
/// Subject ids are names chosen by each owner, so the key is
/// `(owner_id, subject_id, day)`. At most one event exists per key; a later
/// report for the same key replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    id: EventId,
    subject_id: SubjectId,
    subject_kind: SubjectKind,
    owner_id: UserId,
    day: NaiveDate,
    completion_ratio: CompletionRatio,
    notes: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn new(
        subject_id: SubjectId,
        subject_kind: SubjectKind,
        owner_id: UserId,
        day: NaiveDate,
        completion_ratio: CompletionRatio,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if subject_id.as_str().trim().is_empty() {
            return Err(DomainError::Validation(
                "Subject id cannot be empty".to_string(),
            ));
        }
        if owner_id.as_str().trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Completion events require an owner".to_string(),
            ));
        }

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id: EventId::new(),
            subject_id,
            subject_kind,
            owner_id,
            day,
            completion_ratio,
            notes,
            recorded_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EventId,
        subject_id: SubjectId,
        subject_kind: SubjectKind,
        owner_id: UserId,
        day: NaiveDate,
        completion_ratio: CompletionRatio,
        notes: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subject_id,
            subject_kind,
            owner_id,
            day,
            completion_ratio,
            notes,
            recorded_at,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    pub fn subject_kind(&self) -> SubjectKind {
        self.subject_kind
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn completion_ratio(&self) -> CompletionRatio {
        self.completion_ratio
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Replace the payload with a newer report for the same key, keeping the id.
    pub fn supersede_with(&mut self, newer: &CompletionEvent) {
        self.subject_kind = newer.subject_kind;
        self.completion_ratio = newer.completion_ratio;
        self.notes = newer.notes.clone();
        self.recorded_at = newer.recorded_at;
    }
}
