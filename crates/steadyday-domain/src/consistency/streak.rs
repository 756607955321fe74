use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{CompletionEvent, CompletionRatio, QualifyingThreshold, SubjectKind};
use crate::shared::DomainError;

/// Consistency figures derived from one subject's events. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Consecutive qualifying days ending at the reference day.
    pub current_streak: u32,
    /// Longest run of consecutive qualifying days in the input.
    pub longest_streak: u32,
    /// Events whose ratio met the threshold.
    pub qualifying_days: u32,
    /// Events in the input, qualifying or not.
    pub total_executions: u32,
    /// Mean completion ratio as an unrounded percentage.
    pub completion_rate: f64,
}

impl StreakResult {
    pub const EMPTY: StreakResult = StreakResult {
        current_streak: 0,
        longest_streak: 0,
        qualifying_days: 0,
        total_executions: 0,
        completion_rate: 0.0,
    };

    /// Completion rate rounded to the nearest whole percent, for display.
    pub fn completion_rate_rounded(&self) -> u32 {
        self.completion_rate.round() as u32
    }
}

/// Computes streaks and completion rates over a snapshot of events.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakCalculator {
    threshold: QualifyingThreshold,
}

impl StreakCalculator {
    pub fn new(threshold: QualifyingThreshold) -> Self {
        Self { threshold }
    }

    pub fn for_kind(kind: SubjectKind) -> Self {
        Self::new(kind.default_threshold())
    }

    pub fn threshold(&self) -> QualifyingThreshold {
        self.threshold
    }

    pub fn calculate(
        &self,
        events: &[CompletionEvent],
        today: NaiveDate,
    ) -> Result<StreakResult, DomainError> {
        let days: Vec<(NaiveDate, CompletionRatio)> = events
            .iter()
            .map(|e| (e.day(), e.completion_ratio()))
            .collect();
        self.calculate_days(&days, today)
    }

    /// Same as [`calculate`](Self::calculate) over bare `(day, ratio)` pairs.
    ///
    /// Input order does not matter. Two entries for the same day are a data
    /// integrity error: the log only ever holds one report per day.
    pub fn calculate_days(
        &self,
        days: &[(NaiveDate, CompletionRatio)],
        today: NaiveDate,
    ) -> Result<StreakResult, DomainError> {
        if days.is_empty() {
            return Ok(StreakResult::EMPTY);
        }

        let mut seen = BTreeSet::new();
        for (day, _) in days {
            if !seen.insert(*day) {
                return Err(DomainError::DataIntegrity(format!(
                    "More than one completion reported for {}",
                    day
                )));
            }
        }

        let mut qualifying: Vec<NaiveDate> = days
            .iter()
            .filter(|(_, ratio)| ratio.meets(self.threshold))
            .map(|(day, _)| *day)
            .collect();
        qualifying.sort_unstable_by(|a, b| b.cmp(a));

        let ratio_sum: f64 = days.iter().map(|(_, ratio)| ratio.value()).sum();

        Ok(StreakResult {
            current_streak: current_streak(&qualifying, today),
            longest_streak: longest_streak(&qualifying),
            qualifying_days: qualifying.len() as u32,
            total_executions: days.len() as u32,
            completion_rate: ratio_sum / days.len() as f64 * 100.0,
        })
    }
}

/// Walks qualifying days newest first from `today`, one calendar day at a
/// time. Stops at the first gap, so a missing `today` yields 0.
fn current_streak(qualifying_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    let mut cursor = today;

    for day in qualifying_desc.iter().skip_while(|d| **d > today) {
        if *day != cursor {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    streak
}

fn longest_streak(qualifying_desc: &[NaiveDate]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for day in qualifying_desc.iter().rev() {
        run = match prev {
            Some(prev_day) if (*day - prev_day).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*day);
    }

    longest
}
