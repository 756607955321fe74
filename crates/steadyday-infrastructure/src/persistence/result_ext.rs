use steadyday_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    /// Usage: `result.to_infra_err()?`
    fn to_infra_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::Serialization, for row payloads that
    /// fail to parse back into domain values.
    fn to_serialization_err(self, what: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    fn to_serialization_err(self, what: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Serialization(format!("Invalid {}: {}", what, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_infra_err() {
        let result: Result<i32, &str> = Err("infra error");
        match result.to_infra_err() {
            Err(DomainError::Infrastructure(msg)) => assert_eq!(msg, "infra error"),
            _ => panic!("Expected Infrastructure error"),
        }
    }

    #[test]
    fn test_to_serialization_err() {
        let result: Result<i32, &str> = Err("bad date");
        match result.to_serialization_err("day") {
            Err(DomainError::Serialization(msg)) => assert_eq!(msg, "Invalid day: bad date"),
            _ => panic!("Expected Serialization error"),
        }
    }
}
