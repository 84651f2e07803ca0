use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::errors::{CompletionError, CompletionResult};
use crate::provider::CompletionProvider;
use crate::types::*;

/// Client for the Groq chat completions API (OpenAI-compatible)
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl GroqClient {
    /// Create a new client; an API key is mandatory
    pub fn new(config: &ProviderConfig) -> CompletionResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            CompletionError::ConfigError(
                "API key is required to initialize the Groq client".to_string(),
            )
        })?;

        let timeout_secs = config.timeout_secs();
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                CompletionError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one non-streaming completion request
    pub async fn create_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> CompletionResult<ChatCompletionResponse> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.timeout_secs)
                } else {
                    CompletionError::RequestError(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", error_body),
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.timeout_secs)
                } else {
                    CompletionError::ParsingError(format!("Failed to parse response: {}", e))
                }
            })
    }

    /// Text of the first choice, if the provider produced any
    pub fn extract_text(response: &ChatCompletionResponse) -> Option<String> {
        response
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.clone())
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(
        &self,
        turns: &[ChatMessage],
        params: &CompletionParams,
    ) -> CompletionResult<Option<String>> {
        let request = ChatCompletionRequest::new(turns, params);
        debug!(model = %params.model, turns = turns.len(), "Sending completion request");
        let response = self.create_completion(&request).await?;
        Ok(Self::extract_text(&response))
    }
}
