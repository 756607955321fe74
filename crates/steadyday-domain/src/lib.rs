// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod assistant;
pub mod consistency;
pub mod focus;
pub mod mood;
pub mod personality;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, SubjectId, UserId};
