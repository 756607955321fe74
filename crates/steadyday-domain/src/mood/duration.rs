use super::{EnergyLevel, FocusLevel, MoodLevel, MoodVector};
use crate::shared::DomainError;

pub const DEFAULT_BASE_MINUTES: f64 = 25.0;
pub const MIN_SESSION_MINUTES: u32 = 15;
pub const MAX_SESSION_MINUTES: u32 = 45;
pub const MIN_BREAK_MINUTES: u32 = 5;
const BREAK_FRACTION: f64 = 0.2;

fn mood_multiplier(level: MoodLevel) -> f64 {
    match level {
        MoodLevel::VeryLow => 0.6,
        MoodLevel::Low => 0.8,
        MoodLevel::Neutral => 1.0,
        MoodLevel::Good => 1.2,
        MoodLevel::Excellent => 1.4,
    }
}

fn energy_multiplier(level: EnergyLevel) -> f64 {
    match level {
        EnergyLevel::VeryLow => 0.7,
        EnergyLevel::Low => 0.85,
        EnergyLevel::Medium => 1.0,
        EnergyLevel::High => 1.15,
        EnergyLevel::VeryHigh => 1.3,
    }
}

fn focus_multiplier(level: FocusLevel) -> f64 {
    match level {
        FocusLevel::VeryLow => 0.6,
        FocusLevel::Low => 0.8,
        FocusLevel::Medium => 1.0,
        FocusLevel::High => 1.2,
        FocusLevel::VeryHigh => 1.4,
    }
}

/// Maps a day's mood vector to a focus-session length in minutes.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveDurationMapper {
    base_minutes: f64,
}

impl Default for AdaptiveDurationMapper {
    fn default() -> Self {
        Self {
            base_minutes: DEFAULT_BASE_MINUTES,
        }
    }
}

impl AdaptiveDurationMapper {
    pub fn new(base_minutes: f64) -> Result<Self, DomainError> {
        if !base_minutes.is_finite() || base_minutes < 0.0 {
            return Err(DomainError::Validation(format!(
                "Base duration must be a finite, non-negative number of minutes, got {}",
                base_minutes
            )));
        }
        Ok(Self { base_minutes })
    }

    pub fn base_minutes(&self) -> f64 {
        self.base_minutes
    }

    /// Unclamped product of the base and the three multipliers.
    pub fn raw_minutes(&self, vector: &MoodVector) -> f64 {
        self.base_minutes
            * mood_multiplier(vector.mood)
            * energy_multiplier(vector.energy)
            * focus_multiplier(vector.focus)
    }

    /// Rounded and clamped to `[MIN_SESSION_MINUTES, MAX_SESSION_MINUTES]`.
    pub fn recommend(&self, vector: &MoodVector) -> u32 {
        let rounded = self.raw_minutes(vector).round();
        rounded.clamp(
            f64::from(MIN_SESSION_MINUTES),
            f64::from(MAX_SESSION_MINUTES),
        ) as u32
    }
}

/// Break offered after a work session: a fifth of it, never under five minutes.
pub fn break_minutes(work_minutes: u32) -> u32 {
    let proportional = (f64::from(work_minutes) * BREAK_FRACTION).round() as u32;
    proportional.max(MIN_BREAK_MINUTES)
}
