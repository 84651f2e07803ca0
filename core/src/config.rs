use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{CompletionParams, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

pub const APP_NAME: &str = "folio";

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while locating or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP listener settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ServerSection {
    pub http_addr: Option<String>,
    /// Comma-separated list of allowed origins; absent means any origin
    pub cors_allowed_origins: Option<String>,
}

/// Completion provider settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model_name: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_key: other.api_key.clone().or_else(|| self.api_key.clone()),
            base_url: other.base_url.clone().or_else(|| self.base_url.clone()),
            model_name: other.model_name.clone().or_else(|| self.model_name.clone()),
            temperature: other.temperature.or(self.temperature),
            max_tokens: other.max_tokens.or(self.max_tokens),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_GROQ_BASE_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Decoding parameters with built-in defaults filled in
    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            model: self
                .model_name
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }
}

/// Spotify credentials and endpoints for the now-playing proxy
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
    pub token_url: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SpotifyConfig {
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            client_id: other.client_id.clone().or_else(|| self.client_id.clone()),
            client_secret: other
                .client_secret
                .clone()
                .or_else(|| self.client_secret.clone()),
            refresh_token: other
                .refresh_token
                .clone()
                .or_else(|| self.refresh_token.clone()),
            token_url: other.token_url.clone().or_else(|| self.token_url.clone()),
            api_base_url: other
                .api_base_url
                .clone()
                .or_else(|| self.api_base_url.clone()),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// True when all three credentials are present
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some() && self.refresh_token.is_some()
    }

    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(DEFAULT_SPOTIFY_TOKEN_URL)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SPOTIFY_API_BASE_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Top-level configuration file layout
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UnifiedConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub spotify: SpotifyConfig,
}

impl UnifiedConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the default config file, if any
    pub fn load_default() -> ConfigResult<Self> {
        let path = get_default_config_file(APP_NAME)?;
        Self::load_from_file(&path)
    }

    /// Overlays values read from the process environment
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Overlays values from an arbitrary variable lookup; empty values are ignored
    pub fn with_vars<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = ServerSection {
            http_addr: get("FOLIO_HTTP_ADDR").or(self.server.http_addr),
            cors_allowed_origins: get("FOLIO_CORS_ORIGINS").or(self.server.cors_allowed_origins),
        };

        let provider = self.provider.merge(&ProviderConfig {
            api_key: get("GROQ_API_KEY"),
            base_url: get("GROQ_BASE_URL"),
            model_name: get("GROQ_MODEL"),
            ..Default::default()
        });

        let spotify = self.spotify.merge(&SpotifyConfig {
            client_id: get("SPOTIFY_CLIENT_ID"),
            client_secret: get("SPOTIFY_CLIENT_SECRET"),
            refresh_token: get("SPOTIFY_REFRESH_TOKEN"),
            ..Default::default()
        });

        Self {
            server,
            provider,
            spotify,
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> ConfigResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> ConfigResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}
