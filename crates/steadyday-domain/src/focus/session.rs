use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{DomainError, FocusSessionId, UserId};

/// Longest session that can be recorded, in minutes.
pub const MAX_SESSION_LENGTH_MINUTES: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusSessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl FocusSessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusSessionKind::Work => "work",
            FocusSessionKind::ShortBreak => "short_break",
            FocusSessionKind::LongBreak => "long_break",
        }
    }
}

impl fmt::Display for FocusSessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusSessionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" => Ok(FocusSessionKind::Work),
            "short_break" => Ok(FocusSessionKind::ShortBreak),
            "long_break" => Ok(FocusSessionKind::LongBreak),
            other => Err(DomainError::Validation(format!(
                "Unknown focus session kind: {:?}",
                other
            ))),
        }
    }
}

/// A finished work or break period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSession {
    id: FocusSessionId,
    owner_id: UserId,
    kind: FocusSessionKind,
    duration_minutes: u32,
    day: NaiveDate,
    completed_at: DateTime<Utc>,
}

impl FocusSession {
    pub fn new(
        owner_id: UserId,
        kind: FocusSessionKind,
        duration_minutes: u32,
        day: NaiveDate,
    ) -> Result<Self, DomainError> {
        if owner_id.as_str().trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Focus sessions require an owner".to_string(),
            ));
        }
        if duration_minutes == 0 || duration_minutes > MAX_SESSION_LENGTH_MINUTES {
            return Err(DomainError::Validation(format!(
                "Session length must be between 1 and {} minutes, got {}",
                MAX_SESSION_LENGTH_MINUTES, duration_minutes
            )));
        }

        Ok(Self {
            id: FocusSessionId::new(),
            owner_id,
            kind,
            duration_minutes,
            day,
            completed_at: Utc::now(),
        })
    }

    pub fn restore(
        id: FocusSessionId,
        owner_id: UserId,
        kind: FocusSessionKind,
        duration_minutes: u32,
        day: NaiveDate,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            kind,
            duration_minutes,
            day,
            completed_at,
        }
    }

    pub fn id(&self) -> &FocusSessionId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn kind(&self) -> FocusSessionKind {
        self.kind
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Reference day the session was completed on.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

/// Totals over a set of sessions. Breaks count toward sessions and minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStats {
    pub total_sessions: u32,
    pub total_minutes: u32,
    pub work_sessions: u32,
}

impl FocusStats {
    pub fn summarize(sessions: &[FocusSession]) -> Self {
        sessions.iter().fold(Self::default(), |mut stats, session| {
            stats.total_sessions += 1;
            stats.total_minutes += session.duration_minutes();
            if session.kind() == FocusSessionKind::Work {
                stats.work_sessions += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn session(kind: FocusSessionKind, minutes: u32) -> FocusSession {
        FocusSession::new(UserId::from_string("u1"), kind, minutes, day()).unwrap()
    }

    #[test]
    fn test_stats_count_breaks_but_not_as_work() {
        let sessions = vec![
            session(FocusSessionKind::Work, 25),
            session(FocusSessionKind::ShortBreak, 5),
            session(FocusSessionKind::Work, 41),
            session(FocusSessionKind::LongBreak, 15),
        ];

        let stats = FocusStats::summarize(&sessions);

        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.total_minutes, 86);
        assert_eq!(stats.work_sessions, 2);
    }

    #[test]
    fn test_no_sessions_is_zero() {
        assert_eq!(FocusStats::summarize(&[]), FocusStats::default());
    }

    #[test]
    fn test_length_must_be_positive_and_bounded() {
        let owner = UserId::from_string("u1");
        assert!(FocusSession::new(owner.clone(), FocusSessionKind::Work, 0, day()).is_err());
        assert!(FocusSession::new(owner.clone(), FocusSessionKind::Work, 241, day()).is_err());
        assert!(FocusSession::new(owner, FocusSessionKind::Work, 240, day()).is_ok());
    }

    #[test]
    fn test_blank_owner_is_rejected() {
        let result = FocusSession::new(UserId::from_string(""), FocusSessionKind::Work, 25, day());
        assert!(matches!(result, Err(DomainError::MissingOwner(_))));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(
            "short_break".parse::<FocusSessionKind>().unwrap(),
            FocusSessionKind::ShortBreak
        );
        assert_eq!(FocusSessionKind::LongBreak.to_string(), "long_break");
        assert!("nap".parse::<FocusSessionKind>().is_err());
    }
}
