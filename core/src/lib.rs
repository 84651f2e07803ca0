// Core pieces shared by the folio daemon:
// - Completion provider seam and the Groq client
// - Request/response data structures
// - Knowledge context and prompt composition
// - Music status provider and the Spotify client
// - Portfolio data tables
// - Configuration loading
// - Shared error types

pub mod client;
pub use client::*;

pub mod types;
pub use types::*;

pub mod config;
pub use config::{ProviderConfig, SpotifyConfig, UnifiedConfig};

pub mod errors;
pub use errors::*;

pub mod provider;
pub use provider::*;

pub mod knowledge;
pub mod prompt;

pub mod music;
pub use music::*;

pub mod spotify;
pub use spotify::*;

pub mod portfolio;
