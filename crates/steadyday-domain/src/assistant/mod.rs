mod client;
mod context;
mod topic;

pub use client::{ChatMessage, ChatRole, CompletionClient};
pub use context::{system_prompt, UserContext};
pub use topic::{fallback_reply, ChatTopic};
