use serde::{Deserialize, Serialize};

use steadyday_domain::assistant::ChatTopic;

/// Where an assistant reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Completion,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReplyDto {
    pub topic: ChatTopic,
    pub reply: String,
    pub source: ReplySource,
}
