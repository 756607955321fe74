use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, CompletionSettings};
use crate::config::TimeoutConfig;
use crate::persistence::ResultExt;
use steadyday_domain::assistant::{ChatMessage, CompletionClient};
use steadyday_domain::shared::DomainError;

pub struct OpenAiCompletionClient {
    client: Client,
    settings: CompletionSettings,
    endpoint: Url,
}

impl OpenAiCompletionClient {
    pub fn new(settings: CompletionSettings, timeouts: &TimeoutConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .build()
            .to_infra_err()?;

        let endpoint = completions_endpoint(&settings.base_url)?;

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `<base>/chat/completions`, tolerating a base URL with or without a
/// trailing slash.
fn completions_endpoint(base: &Url) -> Result<Url, DomainError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("chat/completions").map_err(|e| {
        DomainError::Validation(format!("Invalid completion endpoint {}: {}", base, e))
    })
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            DomainError::ExternalService("Completion API key is not configured".to_string())
        })?;

        let payload = ChatCompletionRequest {
            model: &self.settings.model,
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(
            "[assistant] requesting completion endpoint={} model={}",
            self.endpoint, self.settings.model
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::ExternalService(format!("Completion request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("[assistant] completion service returned status={}", status);
            return Err(DomainError::ExternalService(format!(
                "Completion service failed with status {}: {}",
                status, body
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to parse completion response: {}", e))
        })?;

        body.into_text().ok_or_else(|| {
            DomainError::ExternalService("Completion response had no content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join_handles_trailing_slash() {
        let with_slash = Url::parse("https://api.example.com/v1/").unwrap();
        let without = Url::parse("https://api.example.com/v1").unwrap();

        assert_eq!(
            completions_endpoint(&with_slash).unwrap().as_str(),
            "https://api.example.com/v1/chat/completions"
        );
        assert_eq!(
            completions_endpoint(&without).unwrap().as_str(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let settings =
            CompletionSettings::new(Url::parse("http://127.0.0.1:9/v1").unwrap(), None);
        let client = OpenAiCompletionClient::new(settings, &TimeoutConfig::default()).unwrap();

        let result = client.complete(&[ChatMessage::user("hello")]).await;

        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }
}
