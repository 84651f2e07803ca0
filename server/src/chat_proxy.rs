use folio_core::knowledge::knowledge_context;
use folio_core::prompt::build_turns;
use folio_core::{CompletionError, CompletionParams, CompletionProviderRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Returned in place of an answer when the model yields no usable text
pub const FALLBACK_RESPONSE: &str = "Sorry, I could not generate a response.";

/// Inbound chat payload; `message` stays optional so a missing field is a validation error, not a parse error
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message is required")]
    InvalidRequest,

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Stateless proxy: one question in, one completion call out, one answer back
#[derive(Clone)]
pub struct ChatProxy {
    provider: CompletionProviderRef,
    params: CompletionParams,
    knowledge: &'static str,
}

impl ChatProxy {
    pub fn new(provider: CompletionProviderRef, params: CompletionParams) -> Self {
        Self {
            provider,
            params,
            knowledge: knowledge_context(),
        }
    }

    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        let message = match request.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => return Err(ChatError::InvalidRequest),
        };

        info!(message_len = message.len(), "Processing chat request");
        let turns = build_turns(self.knowledge, &message);
        let reply = self.provider.complete(&turns, &self.params).await?;

        let response = match reply {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                debug!("Provider returned no usable text, using fallback");
                FALLBACK_RESPONSE.to_string()
            }
        };
        Ok(ChatResponse { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeReply, RecordingProvider};
    use folio_core::Role;
    use std::sync::Arc;

    fn proxy(provider: &Arc<RecordingProvider>) -> ChatProxy {
        ChatProxy::new(provider.clone(), CompletionParams::default())
    }

    #[tokio::test]
    async fn test_forwards_message_and_knowledge_in_one_call() {
        let provider = RecordingProvider::replying(FakeReply::Text(
            "He leads AI initiatives at EY.".to_string(),
        ));
        let response = proxy(&provider)
            .handle(ChatRequest::new("What does he do at EY?"))
            .await
            .unwrap();

        assert_eq!(response.response, "He leads AI initiatives at EY.");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        let (turns, params) = &calls[0];
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert!(turns[0].content.contains("Senior Applied AI Engineer"));
        assert!(turns[0].content.contains(knowledge_context()));
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].content, "What does he do at EY?");
        assert_eq!(params, &CompletionParams::default());
    }

    #[tokio::test]
    async fn test_missing_or_blank_message_is_rejected_without_a_call() {
        let provider = RecordingProvider::replying(FakeReply::Text("unused".to_string()));
        let proxy = proxy(&provider);

        for request in [
            ChatRequest::default(),
            ChatRequest::new(""),
            ChatRequest::new("   \n"),
        ] {
            let err = proxy.handle(request).await.unwrap_err();
            assert!(matches!(err, ChatError::InvalidRequest));
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_completion_uses_fallback() {
        for reply in [FakeReply::Empty, FakeReply::Text("  ".to_string())] {
            let provider = RecordingProvider::replying(reply);
            let response = proxy(&provider)
                .handle(ChatRequest::new("hello"))
                .await
                .unwrap();
            assert_eq!(response.response, FALLBACK_RESPONSE);
            assert_eq!(provider.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_provider_failure_is_an_error() {
        let provider = RecordingProvider::replying(FakeReply::Fail);
        let err = proxy(&provider)
            .handle(ChatRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Completion(_)));
    }

    #[tokio::test]
    async fn test_repeated_questions_are_not_cached() {
        let provider = RecordingProvider::replying(FakeReply::Text("answer".to_string()));
        let proxy = proxy(&provider);

        for _ in 0..3 {
            proxy.handle(ChatRequest::new("same question")).await.unwrap();
        }
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_message_is_not_trimmed_before_forwarding() {
        let provider = RecordingProvider::replying(FakeReply::Text("ok".to_string()));
        proxy(&provider)
            .handle(ChatRequest::new("  padded  "))
            .await
            .unwrap();
        assert_eq!(provider.calls()[0].0[1].content, "  padded  ");
    }
}
