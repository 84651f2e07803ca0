use async_trait::async_trait;
use folio_core::music::{MusicError, MusicProvider, MusicResult, NowPlaying};
use folio_core::{ChatMessage, CompletionError, CompletionParams, CompletionProvider, CompletionResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    Empty,
    Fail,
    Timeout,
}

/// Completion provider double that records every call it receives
#[derive(Debug)]
pub struct RecordingProvider {
    reply: FakeReply,
    calls: Mutex<Vec<(Vec<ChatMessage>, CompletionParams)>>,
}

impl RecordingProvider {
    pub fn replying(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(Vec<ChatMessage>, CompletionParams)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(
        &self,
        turns: &[ChatMessage],
        params: &CompletionParams,
    ) -> CompletionResult<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((turns.to_vec(), params.clone()));
        match &self.reply {
            FakeReply::Text(text) => Ok(Some(text.clone())),
            FakeReply::Empty => Ok(None),
            FakeReply::Fail => Err(CompletionError::HttpError {
                status_code: 401,
                message: "Invalid API Key gsk_secret".to_string(),
            }),
            FakeReply::Timeout => Err(CompletionError::Timeout(30)),
        }
    }
}

/// Music provider double returning a fixed outcome
pub struct StaticMusic {
    pub result: Option<NowPlaying>,
    pub calls: AtomicUsize,
}

impl StaticMusic {
    pub fn playing(now: NowPlaying) -> Arc<Self> {
        Arc::new(Self {
            result: Some(now),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: None,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl MusicProvider for StaticMusic {
    async fn now_playing(&self) -> MusicResult<NowPlaying> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .ok_or_else(|| MusicError::TokenError("refresh token revoked".to_string()))
    }
}
