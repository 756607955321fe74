use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::MoodVector;
use crate::shared::{DomainError, MoodEntryId, UserId};

/// A user's mood check-in for one day. One entry per `(owner, day)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    id: MoodEntryId,
    owner_id: UserId,
    day: NaiveDate,
    vector: MoodVector,
    notes: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(
        owner_id: UserId,
        day: NaiveDate,
        vector: MoodVector,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if owner_id.as_str().trim().is_empty() {
            return Err(DomainError::MissingOwner(
                "Mood entries require an owner".to_string(),
            ));
        }

        Ok(Self {
            id: MoodEntryId::new(),
            owner_id,
            day,
            vector,
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            recorded_at: Utc::now(),
        })
    }

    pub fn restore(
        id: MoodEntryId,
        owner_id: UserId,
        day: NaiveDate,
        vector: MoodVector,
        notes: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            day,
            vector,
            notes,
            recorded_at,
        }
    }

    pub fn id(&self) -> &MoodEntryId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn vector(&self) -> MoodVector {
        self.vector
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Mean mood score (1-5) rounded to one decimal; `None` without entries.
pub fn average_mood_score(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let total: u32 = entries
        .iter()
        .map(|e| u32::from(e.vector().mood.score()))
        .sum();
    let mean = f64::from(total) / entries.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{EnergyLevel, FocusLevel, MoodLevel};

    fn entry(mood: MoodLevel, d: u32) -> MoodEntry {
        MoodEntry::new(
            UserId::from_string("u1"),
            NaiveDate::from_ymd_opt(2024, 6, d).unwrap(),
            MoodVector::new(mood, EnergyLevel::Medium, FocusLevel::Medium),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_average_of_no_entries_is_none() {
        assert_eq!(average_mood_score(&[]), None);
    }

    #[test]
    fn test_average_is_rounded_to_one_decimal() {
        let entries = vec![
            entry(MoodLevel::Good, 1),
            entry(MoodLevel::Low, 2),
            entry(MoodLevel::Excellent, 3),
        ];
        // (4 + 2 + 5) / 3 = 3.666..
        assert_eq!(average_mood_score(&entries), Some(3.7));
    }

    #[test]
    fn test_entry_requires_owner() {
        let result = MoodEntry::new(
            UserId::from_string(""),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            MoodVector::new(MoodLevel::Good, EnergyLevel::High, FocusLevel::High),
            None,
        );
        assert!(matches!(result, Err(DomainError::MissingOwner(_))));
    }
}
