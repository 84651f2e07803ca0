use anyhow::{Context, Result};
use clap::Parser;
use folio_core::music::MusicProviderRef;
use folio_core::{GroqClient, SpotifyClient, UnifiedConfig};
use folio_server::chat_proxy::ChatProxy;
use folio_server::config::AppConfig;
use folio_server::http_server::{self, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "folio-server",
    about = "Portfolio backend: chat assistant, now playing and portfolio data",
    version
)]
struct Args {
    /// Path to config file (defaults to ~/.config/folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP server address
    #[arg(long, env = "FOLIO_HTTP_ADDR")]
    http_addr: Option<SocketAddr>,

    /// Groq API key
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Model to use for chat completions
    #[arg(short = 'm', long)]
    model: Option<String>,

    /// Disable the now-playing proxy even if Spotify credentials are present
    #[arg(long)]
    no_spotify: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .init();

    info!("Starting folio server");

    let unified = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            UnifiedConfig::load_from_file(path)
        }
        None => UnifiedConfig::load_default(),
    }
    .context("Configuration error")?
    .with_env();

    let mut config = AppConfig::try_from(&unified)?;

    // CLI flags win over file and environment
    if let Some(addr) = args.http_addr {
        config.http_addr = addr;
    }
    if let Some(api_key) = args.api_key {
        config.provider.api_key = Some(api_key);
    }
    if let Some(model) = args.model {
        config.provider.model_name = Some(model);
    }

    let groq = GroqClient::new(&config.provider).context("Failed to initialize Groq client")?;
    let params = config.provider.completion_params();
    info!(model = %params.model, "Initialized Groq client");
    let chat = ChatProxy::new(Arc::new(groq), params);

    let music: Option<MusicProviderRef> = if args.no_spotify {
        info!("Now-playing proxy disabled");
        None
    } else if config.spotify.is_configured() {
        let spotify =
            SpotifyClient::new(&config.spotify).context("Failed to initialize Spotify client")?;
        info!("Initialized Spotify client");
        Some(Arc::new(spotify) as MusicProviderRef)
    } else {
        warn!("Spotify credentials not set, now-playing will always report idle");
        None
    };

    http_server::run_server(config, AppState::new(chat, music)).await?;

    info!("folio server shutting down");
    Ok(())
}
