use log::{info, warn};
use std::sync::Arc;

use crate::application::dtos::{AssistantReplyDto, ReplySource};
use steadyday_domain::assistant::{
    fallback_reply, system_prompt, ChatMessage, ChatTopic, CompletionClient, UserContext,
};

/// Answers user questions through the completion client, falling back to the
/// topic's canned reply whenever the client is missing or fails.
pub struct AssistantService {
    client: Option<Arc<dyn CompletionClient>>,
}

impl AssistantService {
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn reply(
        &self,
        message: &str,
        topic: ChatTopic,
        context: &UserContext,
    ) -> AssistantReplyDto {
        let Some(client) = &self.client else {
            warn!("[assistant] completion client not configured, topic={}", topic);
            return fallback(topic);
        };

        let message = message.trim();
        if message.is_empty() {
            warn!("[assistant] empty message, topic={}", topic);
            return fallback(topic);
        }

        let messages = [
            ChatMessage::system(system_prompt(context)),
            ChatMessage::user(message),
        ];

        match client.complete(&messages).await {
            Ok(reply) => {
                info!(
                    "[assistant] reply topic={} chars={}",
                    topic,
                    reply.chars().count()
                );
                AssistantReplyDto {
                    topic,
                    reply,
                    source: ReplySource::Completion,
                }
            }
            Err(e) => {
                warn!("[assistant] completion failed, topic={}: {}", topic, e);
                fallback(topic)
            }
        }
    }
}

fn fallback(topic: ChatTopic) -> AssistantReplyDto {
    AssistantReplyDto {
        topic,
        reply: fallback_reply(topic).to_string(),
        source: ReplySource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use steadyday_domain::assistant::ChatRole;
    use steadyday_domain::shared::DomainError;

    mock! {
        pub Client {}

        #[async_trait]
        impl CompletionClient for Client {
            async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;
        }
    }

    #[tokio::test]
    async fn test_reply_comes_from_client() {
        let mut client = MockClient::new();
        client
            .expect_complete()
            .withf(|messages| {
                messages.len() == 2
                    && messages[0].role == ChatRole::System
                    && messages[0].content.contains("Recent average mood: 3.5/5")
                    && messages[1].role == ChatRole::User
                    && messages[1].content == "How do I start?"
            })
            .times(1)
            .returning(|_| Ok("Start with two minutes.".to_string()));
        let service = AssistantService::new(Some(Arc::new(client)));
        let context = UserContext {
            recent_mood_average: Some(3.5),
            ..UserContext::default()
        };

        let reply = service
            .reply("  How do I start?  ", ChatTopic::Task, &context)
            .await;

        assert_eq!(reply.source, ReplySource::Completion);
        assert_eq!(reply.reply, "Start with two minutes.");
        assert_eq!(reply.topic, ChatTopic::Task);
    }

    #[tokio::test]
    async fn test_client_error_falls_back_to_template() {
        let mut client = MockClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_| Err(DomainError::ExternalService("HTTP 500".to_string())));
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service
            .reply("hello", ChatTopic::Mood, &UserContext::default())
            .await;

        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(reply.reply, fallback_reply(ChatTopic::Mood));
    }

    #[tokio::test]
    async fn test_missing_client_falls_back_to_template() {
        let service = AssistantService::new(None);

        let reply = service
            .reply("hello", ChatTopic::Routine, &UserContext::default())
            .await;

        assert!(!service.is_configured());
        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(reply.reply, fallback_reply(ChatTopic::Routine));
    }

    #[tokio::test]
    async fn test_blank_message_skips_client() {
        let mut client = MockClient::new();
        client.expect_complete().times(0);
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service
            .reply("   ", ChatTopic::General, &UserContext::default())
            .await;

        assert_eq!(reply.source, ReplySource::Fallback);
    }
}
