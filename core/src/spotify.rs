use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SpotifyConfig;
use crate::music::{MusicError, MusicProvider, MusicResult, NowPlaying};

/// Spotify Web API client that reports the listener's current track
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    basic_auth: String,
    refresh_token: String,
    token_url: String,
    api_base_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct CurrentlyPlaying {
    #[serde(default)]
    is_playing: bool,
    item: Option<Track>,
}

#[derive(Deserialize)]
struct RecentlyPlayed {
    #[serde(default)]
    items: Vec<PlayHistory>,
}

#[derive(Deserialize)]
struct PlayHistory {
    track: Option<Track>,
}

#[derive(Deserialize)]
struct Track {
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    album: Album,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Deserialize)]
struct Artist {
    name: String,
}

#[derive(Deserialize)]
struct Album {
    name: String,
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct Image {
    url: String,
}

#[derive(Deserialize, Default)]
struct ExternalUrls {
    spotify: Option<String>,
}

impl Track {
    fn into_now_playing(self, is_playing: bool) -> NowPlaying {
        let artist = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        NowPlaying {
            is_playing,
            title: Some(self.name),
            artist: Some(artist),
            album: Some(self.album.name),
            album_image_url: self.album.images.into_iter().next().map(|i| i.url),
            song_url: self.external_urls.spotify,
        }
    }
}

impl SpotifyClient {
    /// Build a client; all three credentials must be configured
    pub fn new(config: &SpotifyConfig) -> MusicResult<Self> {
        let (Some(client_id), Some(client_secret), Some(refresh_token)) = (
            config.client_id.as_ref(),
            config.client_secret.as_ref(),
            config.refresh_token.as_ref(),
        ) else {
            return Err(MusicError::NotConfigured);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| MusicError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            basic_auth: STANDARD.encode(format!("{}:{}", client_id, client_secret)),
            refresh_token: refresh_token.clone(),
            token_url: config.token_url().to_string(),
            api_base_url: config.api_base_url().trim_end_matches('/').to_string(),
        })
    }

    /// Exchange the long-lived refresh token for a short-lived access token.
    ///
    /// `Ok(None)` means the token endpoint rejected the exchange.
    async fn access_token(&self) -> MusicResult<Option<String>> {
        let response = self
            .client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", self.basic_auth))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MusicError::TokenError(format!("Failed to request token: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Token exchange rejected");
            return Ok(None);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| MusicError::ParsingError(format!("Failed to parse token: {}", e)))?;
        token
            .access_token
            .map(Some)
            .ok_or_else(|| MusicError::TokenError("No access token in response".to_string()))
    }

    async fn get(&self, path: &str, access_token: &str) -> MusicResult<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.api_base_url, path))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| MusicError::RequestError(format!("Failed to send request: {}", e)))
    }

    /// Most recently played track, reported as not playing
    async fn recently_played(&self, access_token: &str) -> MusicResult<NowPlaying> {
        let response = self
            .get("/me/player/recently-played?limit=1", access_token)
            .await?;
        if response.status() != StatusCode::OK {
            debug!(status = response.status().as_u16(), "No recently played track");
            return Ok(NowPlaying::idle());
        }

        let recent: RecentlyPlayed = response
            .json()
            .await
            .map_err(|e| MusicError::ParsingError(format!("Failed to parse history: {}", e)))?;
        Ok(recent
            .items
            .into_iter()
            .next()
            .and_then(|entry| entry.track)
            .map(|track| track.into_now_playing(false))
            .unwrap_or_else(NowPlaying::idle))
    }
}

#[async_trait]
impl MusicProvider for SpotifyClient {
    async fn now_playing(&self) -> MusicResult<NowPlaying> {
        let Some(access_token) = self.access_token().await? else {
            return Ok(NowPlaying::idle());
        };
        let response = self
            .get("/me/player/currently-playing", &access_token)
            .await?;

        let status = response.status();
        // 204 means the player is idle; client and server errors fall back to history as well
        if status == StatusCode::NO_CONTENT || status.as_u16() > 400 {
            return self.recently_played(&access_token).await;
        }

        let current: CurrentlyPlaying = response
            .json()
            .await
            .map_err(|e| MusicError::ParsingError(format!("Failed to parse player: {}", e)))?;
        Ok(match current.item {
            Some(track) => track.into_now_playing(current.is_playing),
            None => NowPlaying::idle(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Form;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct FakeSpotify {
        current_status: AxumStatus,
        current_body: Value,
        recent_status: AxumStatus,
        recent_body: Value,
        token_status: AxumStatus,
        token_requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
    }

    fn track(name: &str) -> Value {
        json!({
            "name": name,
            "artists": [{"name": "Artist A"}, {"name": "Artist B"}],
            "album": {"name": "Album", "images": [{"url": "https://img/large"}, {"url": "https://img/small"}]},
            "external_urls": {"spotify": "https://open.spotify.com/track/1"}
        })
    }

    async fn spawn(fake: FakeSpotify) -> SpotifyClient {
        let token_state = fake.clone();
        let current_state = fake.clone();
        let recent_state = fake.clone();
        let app = Router::new()
            .route(
                "/api/token",
                post(move |headers: HeaderMap, Form(form): Form<HashMap<String, String>>| {
                    let state = token_state.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string();
                        state.token_requests.lock().unwrap().push((auth, form));
                        if state.token_status != AxumStatus::OK {
                            return (state.token_status, Json(json!({"error": "invalid_grant"})));
                        }
                        (
                            AxumStatus::OK,
                            Json(json!({"access_token": "access", "token_type": "Bearer"})),
                        )
                    }
                }),
            )
            .route(
                "/v1/me/player/currently-playing",
                get(move || {
                    let state = current_state.clone();
                    async move {
                        if state.current_status == AxumStatus::NO_CONTENT {
                            return AxumStatus::NO_CONTENT.into_response();
                        }
                        (state.current_status, Json(state.current_body)).into_response()
                    }
                }),
            )
            .route(
                "/v1/me/player/recently-played",
                get(move || {
                    let state = recent_state.clone();
                    async move { (state.recent_status, Json(state.recent_body)) }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        SpotifyClient::new(&SpotifyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            refresh_token: Some("refresh".to_string()),
            token_url: Some(format!("http://{}/api/token", addr)),
            api_base_url: Some(format!("http://{}/v1", addr)),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    fn fake(current_status: AxumStatus, current_body: Value) -> FakeSpotify {
        FakeSpotify {
            current_status,
            current_body,
            recent_status: AxumStatus::OK,
            recent_body: json!({"items": [{"track": track("Recent Song")}]}),
            token_status: AxumStatus::OK,
            token_requests: Arc::default(),
        }
    }

    #[test]
    fn test_new_requires_all_credentials() {
        let config = SpotifyConfig {
            client_id: Some("id".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            SpotifyClient::new(&config),
            Err(MusicError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_currently_playing_track() {
        let fake = fake(
            AxumStatus::OK,
            json!({"is_playing": true, "item": track("Live Song")}),
        );
        let requests = fake.token_requests.clone();
        let client = spawn(fake).await;

        let now = client.now_playing().await.unwrap();
        assert!(now.is_playing);
        assert_eq!(now.title.as_deref(), Some("Live Song"));
        assert_eq!(now.artist.as_deref(), Some("Artist A, Artist B"));
        assert_eq!(now.album.as_deref(), Some("Album"));
        assert_eq!(now.album_image_url.as_deref(), Some("https://img/large"));
        assert_eq!(
            now.song_url.as_deref(),
            Some("https://open.spotify.com/track/1")
        );

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (auth, form) = &requests[0];
        assert_eq!(auth, &format!("Basic {}", STANDARD.encode("id:secret")));
        assert_eq!(form.get("grant_type").map(String::as_str), Some("refresh_token"));
        assert_eq!(form.get("refresh_token").map(String::as_str), Some("refresh"));
    }

    #[tokio::test]
    async fn test_idle_player_falls_back_to_recent_track() {
        let client = spawn(fake(AxumStatus::NO_CONTENT, Value::Null)).await;

        let now = client.now_playing().await.unwrap();
        assert!(!now.is_playing);
        assert_eq!(now.title.as_deref(), Some("Recent Song"));
    }

    #[tokio::test]
    async fn test_player_error_with_failing_history_is_idle() {
        let mut fake = fake(AxumStatus::UNAUTHORIZED, json!({"error": "expired"}));
        fake.recent_status = AxumStatus::UNAUTHORIZED;
        fake.recent_body = json!({"error": "expired"});
        let client = spawn(fake).await;

        assert_eq!(client.now_playing().await.unwrap(), NowPlaying::idle());
    }

    #[tokio::test]
    async fn test_empty_history_is_idle() {
        let mut fake = fake(AxumStatus::NO_CONTENT, Value::Null);
        fake.recent_body = json!({"items": []});
        let client = spawn(fake).await;

        assert_eq!(client.now_playing().await.unwrap(), NowPlaying::idle());
    }

    #[tokio::test]
    async fn test_player_without_item_is_idle() {
        let client = spawn(fake(
            AxumStatus::OK,
            json!({"is_playing": true, "item": null}),
        ))
        .await;

        assert_eq!(client.now_playing().await.unwrap(), NowPlaying::idle());
    }

    #[tokio::test]
    async fn test_rejected_token_exchange_is_idle() {
        let mut fake = fake(
            AxumStatus::OK,
            json!({"is_playing": true, "item": track("Live Song")}),
        );
        fake.token_status = AxumStatus::BAD_REQUEST;
        let requests = fake.token_requests.clone();
        let client = spawn(fake).await;

        assert_eq!(client.now_playing().await.unwrap(), NowPlaying::idle());
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}
