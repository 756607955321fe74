use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// What a user is asking the assistant about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    #[default]
    General,
    Routine,
    Task,
    Mood,
    Personality,
}

impl ChatTopic {
    pub const ALL: [ChatTopic; 5] = [
        ChatTopic::General,
        ChatTopic::Routine,
        ChatTopic::Task,
        ChatTopic::Mood,
        ChatTopic::Personality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatTopic::General => "general",
            ChatTopic::Routine => "routine",
            ChatTopic::Task => "task",
            ChatTopic::Mood => "mood",
            ChatTopic::Personality => "personality",
        }
    }
}

impl fmt::Display for ChatTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatTopic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "general" => Ok(ChatTopic::General),
            "routine" => Ok(ChatTopic::Routine),
            "task" => Ok(ChatTopic::Task),
            "mood" => Ok(ChatTopic::Mood),
            "personality" => Ok(ChatTopic::Personality),
            other => Err(DomainError::Validation(format!(
                "Unknown chat topic: {:?}",
                other
            ))),
        }
    }
}

/// Static reply used whenever the completion service cannot answer.
pub fn fallback_reply(topic: ChatTopic) -> &'static str {
    match topic {
        ChatTopic::General => {
            "I understand. Breaking big tasks into small steps makes them much easier to start. \
             How about we pick one specific task and organise it together?"
        }
        ChatTopic::Routine => {
            "Routines make a real difference. Start with a simple morning routine: wake up, \
             drink some water, move for five minutes and plan your day."
        }
        ChatTopic::Task => {
            "Try the two-minute rule: if something takes less than two minutes, do it now. \
             Split bigger tasks into 15 to 25 minute blocks."
        }
        ChatTopic::Mood => {
            "Tracking your mood is important. Paying attention to your emotional patterns is \
             already a big step!"
        }
        ChatTopic::Personality => {
            "Your personality type can help explain your patterns and motivations. Each type \
             has strategies that tend to work better for it."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_labels_round_trip() {
        for topic in ChatTopic::ALL {
            assert_eq!(topic.as_str().parse::<ChatTopic>().unwrap(), topic);
        }
        assert!("weather".parse::<ChatTopic>().is_err());
    }

    #[test]
    fn test_every_topic_has_a_fallback() {
        for topic in ChatTopic::ALL {
            assert!(!fallback_reply(topic).is_empty());
        }
        assert_ne!(
            fallback_reply(ChatTopic::Task),
            fallback_reply(ChatTopic::Mood)
        );
    }
}
