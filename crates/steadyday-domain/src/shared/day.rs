use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Longest window any query may ask for.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Calendar day of `now` in the reference timezone.
///
/// Every stored day is normalized through this function, so two reports made
/// on the same local day always land on the same key.
pub fn reference_day(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayWindow {
    /// The `days` calendar days ending at (and including) `end`.
    pub fn ending_at(end: NaiveDate, days: u32) -> Result<Self, DomainError> {
        if days == 0 || days > MAX_WINDOW_DAYS {
            return Err(DomainError::Validation(format!(
                "Days must be between 1 and {}",
                MAX_WINDOW_DAYS
            )));
        }

        let start = end
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "A {}-day window ending at {} starts before the earliest supported date",
                    days, end
                ))
            })?;

        Ok(Self { start, end })
    }

    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::Validation(format!(
                "Window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    pub fn len_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
