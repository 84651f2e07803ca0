use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Music status provider errors
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Music provider is not configured")]
    NotConfigured,

    #[error("Token Error: {0}")]
    TokenError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),
}

pub type MusicResult<T> = Result<T, MusicError>;

/// Normalised "now playing" snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_url: Option<String>,
}

impl NowPlaying {
    /// Nothing playing and no recent track to show
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Source of the listener's current or most recent track
#[async_trait]
pub trait MusicProvider: Send + Sync {
    async fn now_playing(&self) -> MusicResult<NowPlaying>;
}

pub type MusicProviderRef = Arc<dyn MusicProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_serializes_to_single_flag() {
        let value = serde_json::to_value(NowPlaying::idle()).unwrap();
        assert_eq!(value, serde_json::json!({"isPlaying": false}));
    }

    #[test]
    fn test_track_uses_camel_case_keys() {
        let track = NowPlaying {
            is_playing: true,
            title: Some("Song".to_string()),
            album_image_url: Some("https://img".to_string()),
            song_url: Some("https://open".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(track).unwrap();
        assert_eq!(value["isPlaying"], true);
        assert_eq!(value["albumImageUrl"], "https://img");
        assert_eq!(value["songUrl"], "https://open");
        assert!(value.get("artist").is_none());
    }
}
