use steadyday_domain::consistency::{QualifyingThreshold, StreakCalculator, SubjectKind};
use steadyday_domain::shared::DomainError;

/// Qualifying thresholds per subject kind, as configured in settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyThresholds {
    pub routine: QualifyingThreshold,
    pub habit: QualifyingThreshold,
}

impl Default for ConsistencyThresholds {
    fn default() -> Self {
        Self {
            routine: SubjectKind::Routine.default_threshold(),
            habit: SubjectKind::Habit.default_threshold(),
        }
    }
}

impl ConsistencyThresholds {
    pub fn new(routine: f64, habit: f64) -> Result<Self, DomainError> {
        Ok(Self {
            routine: QualifyingThreshold::new(routine)?,
            habit: QualifyingThreshold::new(habit)?,
        })
    }

    pub fn for_kind(&self, kind: SubjectKind) -> QualifyingThreshold {
        match kind {
            SubjectKind::Routine => self.routine,
            SubjectKind::Habit => self.habit,
        }
    }

    pub fn calculator(&self, kind: SubjectKind) -> StreakCalculator {
        StreakCalculator::new(self.for_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_subject_kind() {
        let thresholds = ConsistencyThresholds::default();
        assert_eq!(thresholds.for_kind(SubjectKind::Routine).value(), 0.70);
        assert_eq!(thresholds.for_kind(SubjectKind::Habit).value(), 1.0);
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        assert!(ConsistencyThresholds::new(0.0, 1.0).is_err());
        assert!(ConsistencyThresholds::new(0.8, 1.5).is_err());
        assert!(ConsistencyThresholds::new(0.8, 0.9).is_ok());
    }
}
