//! HTTP error type for the chat endpoint.
//!
//! Validation failures echo their message to the caller. Internal failures
//! are logged with full detail and answered with one fixed message, so
//! provider errors (status codes, keys, bodies) never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::chat_proxy::ChatError;

/// Body text of every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to process chat request";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent an invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything that failed after validation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, client_message) = match self {
            ApiError::InvalidRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Internal(m) => {
                error!(message = %m, "Chat API error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::InvalidRequest => ApiError::InvalidRequest(e.to_string()),
            ChatError::Completion(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::CompletionError;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ApiError::from(ChatError::InvalidRequest).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_completion_failure_maps_to_500() {
        let err = ChatError::Completion(CompletionError::Timeout(30));
        let api = ApiError::from(err);
        assert!(matches!(&api, ApiError::Internal(m) if m.contains("30 seconds")));
        assert_eq!(
            api.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
