use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

macro_rules! define_scale {
    ($name:ident, $label:literal, [$($variant:ident => $text:literal),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: [$name; 5] = [$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Ordinal position on the scale, 1 (lowest) to 5 (highest).
            pub fn score(&self) -> u8 {
                Self::ALL
                    .iter()
                    .position(|level| level == self)
                    .map(|idx| idx as u8 + 1)
                    .unwrap_or(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(DomainError::Validation(format!(
                        "Unknown {} level: {:?}",
                        $label, other
                    ))),
                }
            }
        }
    };
}

define_scale!(MoodLevel, "mood", [
    VeryLow => "very_low",
    Low => "low",
    Neutral => "neutral",
    Good => "good",
    Excellent => "excellent",
]);

define_scale!(EnergyLevel, "energy", [
    VeryLow => "very_low",
    Low => "low",
    Medium => "medium",
    High => "high",
    VeryHigh => "very_high",
]);

define_scale!(FocusLevel, "focus", [
    VeryLow => "very_low",
    Low => "low",
    Medium => "medium",
    High => "high",
    VeryHigh => "very_high",
]);

/// Self-reported state for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodVector {
    pub mood: MoodLevel,
    pub energy: EnergyLevel,
    pub focus: FocusLevel,
}

impl MoodVector {
    pub fn new(mood: MoodLevel, energy: EnergyLevel, focus: FocusLevel) -> Self {
        Self {
            mood,
            energy,
            focus,
        }
    }

    /// Parse a vector from its snake_case labels; every field is required.
    pub fn from_labels(mood: &str, energy: &str, focus: &str) -> Result<Self, DomainError> {
        Ok(Self {
            mood: mood.parse()?,
            energy: energy.parse()?,
            focus: focus.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_follow_scale_order() {
        assert_eq!(MoodLevel::VeryLow.score(), 1);
        assert_eq!(MoodLevel::Neutral.score(), 3);
        assert_eq!(MoodLevel::Excellent.score(), 5);
        assert_eq!(EnergyLevel::VeryHigh.score(), 5);
        assert_eq!(FocusLevel::Low.score(), 2);
    }

    #[test]
    fn test_labels_round_trip() {
        for level in MoodLevel::ALL {
            assert_eq!(level.as_str().parse::<MoodLevel>().unwrap(), level);
        }
        for level in FocusLevel::ALL {
            assert_eq!(level.to_string().parse::<FocusLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!("medium".parse::<MoodLevel>().is_err());
        assert!("neutral".parse::<EnergyLevel>().is_err());
        assert!(MoodVector::from_labels("good", "high", "").is_err());
    }

    #[test]
    fn test_vector_from_labels() {
        let vector = MoodVector::from_labels("good", "very_high", "low").unwrap();
        assert_eq!(
            vector,
            MoodVector::new(MoodLevel::Good, EnergyLevel::VeryHigh, FocusLevel::Low)
        );
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&EnergyLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}
