use thiserror::Error;

/// Completion provider errors
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Parsing Error: {0}")]
    ParsingError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },
}

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;
