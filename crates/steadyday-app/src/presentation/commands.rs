// Module declarations
pub mod assistant;
pub mod consistency;
pub mod focus;
pub mod mood;
pub mod personality;

// Re-export all commands for easy access
pub use assistant::*;
pub use consistency::*;
pub use focus::*;
pub use mood::*;
pub use personality::*;
