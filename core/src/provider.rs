use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CompletionResult;
use crate::types::{ChatMessage, CompletionParams};

/// A hosted language model that turns role-tagged turns into one completion.
///
/// `Ok(None)` means the provider answered but produced no text (no choices,
/// or a choice without content).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        turns: &[ChatMessage],
        params: &CompletionParams,
    ) -> CompletionResult<Option<String>>;
}

/// Type alias for Arc-wrapped CompletionProvider trait objects
pub type CompletionProviderRef = Arc<dyn CompletionProvider>;
