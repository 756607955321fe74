mod repository;
mod session;

pub use repository::FocusSessionRepository;
pub use session::{FocusSession, FocusSessionKind, FocusStats, MAX_SESSION_LENGTH_MINUTES};
