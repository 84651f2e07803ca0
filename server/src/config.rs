use anyhow::{Context, Result};
use folio_core::{ProviderConfig, SpotifyConfig, UnifiedConfig};
use std::net::SocketAddr;

pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

/// Fully resolved daemon configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    /// Empty means any origin is allowed
    pub cors_allowed_origins: Vec<String>,
    pub provider: ProviderConfig,
    pub spotify: SpotifyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_allowed_origins: Vec::new(),
            provider: ProviderConfig::default(),
            spotify: SpotifyConfig::default(),
        }
    }
}

impl TryFrom<&UnifiedConfig> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(config: &UnifiedConfig) -> Result<Self> {
        let addr = config
            .server
            .http_addr
            .as_deref()
            .unwrap_or(DEFAULT_HTTP_ADDR);
        let http_addr = addr
            .parse()
            .with_context(|| format!("Invalid HTTP address '{}'", addr))?;

        let cors_allowed_origins = config
            .server
            .cors_allowed_origins
            .as_deref()
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            http_addr,
            cors_allowed_origins,
            provider: config.provider.clone(),
            spotify: config.spotify.clone(),
        })
    }
}
