use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// The nine personality categories, numbered 1 to 9.
///
/// Declaration order matches the numbering, so the derived `Ord` is also
/// the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PersonalityType {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 9] = [
        PersonalityType::One,
        PersonalityType::Two,
        PersonalityType::Three,
        PersonalityType::Four,
        PersonalityType::Five,
        PersonalityType::Six,
        PersonalityType::Seven,
        PersonalityType::Eight,
        PersonalityType::Nine,
    ];

    pub fn number(&self) -> u8 {
        match self {
            PersonalityType::One => 1,
            PersonalityType::Two => 2,
            PersonalityType::Three => 3,
            PersonalityType::Four => 4,
            PersonalityType::Five => 5,
            PersonalityType::Six => 6,
            PersonalityType::Seven => 7,
            PersonalityType::Eight => 8,
            PersonalityType::Nine => 9,
        }
    }

    pub fn from_number(number: u8) -> Result<Self, DomainError> {
        match number {
            1..=9 => Ok(Self::ALL[usize::from(number - 1)]),
            other => Err(DomainError::Validation(format!(
                "Personality type must be between 1 and 9, got {}",
                other
            ))),
        }
    }

    /// Zero-based position in [`ALL`](Self::ALL).
    pub(crate) fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<u8> for PersonalityType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<PersonalityType> for u8 {
    fn from(value: PersonalityType) -> Self {
        value.number()
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for PersonalityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| {
            DomainError::Validation(format!("Invalid personality type: {:?}", s))
        })?;
        Self::from_number(number)
    }
}
