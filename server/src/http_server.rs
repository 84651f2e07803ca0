use crate::chat_proxy::{ChatProxy, ChatRequest, ChatResponse};
use crate::config::AppConfig;
use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use folio_core::music::{MusicProviderRef, NowPlaying};
use folio_core::portfolio::{portfolio, Portfolio};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    chat: Arc<ChatProxy>,
    music: Option<MusicProviderRef>,
}

impl AppState {
    pub fn new(chat: ChatProxy, music: Option<MusicProviderRef>) -> Self {
        Self {
            chat: Arc::new(chat),
            music,
        }
    }
}

/// CORS layer for the configured origins; an empty list allows any origin
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        if !origins.is_empty() {
            warn!("No valid CORS origins configured, allowing any origin");
        }
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(allowed))
    }
}

/// Build the router with every endpoint mounted
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/chat", post(handle_chat))
        .route("/api/chat", post(handle_chat))
        .route("/api/spotify", get(handle_now_playing))
        .route("/api/now-playing", get(handle_now_playing))
        .route("/api/portfolio", get(handle_portfolio))
        .with_state(state)
}

/// Start the HTTP server and serve until Ctrl-C
pub async fn run_server(config: AppConfig, state: AppState) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}", config.http_addr);

    let app = router(state)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", config.http_addr, e))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start HTTP server: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

/// Health check handler
async fn health() -> impl IntoResponse {
    "folio-server is running"
}

/// Handler for chat requests.
///
/// The body is parsed by hand: a missing `message` is a 400, while a body
/// that is not JSON at all is reported as an internal failure.
async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("Invalid request body: {}", e)))?;

    let response = state.chat.handle(request).await?;
    Ok(Json(response))
}

/// Handler for the listener's current track
async fn handle_now_playing(State(state): State<AppState>) -> Response {
    let Some(music) = &state.music else {
        return Json(NowPlaying::idle()).into_response();
    };

    match music.now_playing().await {
        Ok(now) => Json(now).into_response(),
        Err(e) => {
            error!(error = %e, "Error fetching from Spotify");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(NowPlaying::idle())).into_response()
        }
    }
}

async fn handle_portfolio() -> Json<&'static Portfolio> {
    Json(portfolio())
}
