//! Prerender-Queue: link discovery for static-site prerendering
//!
//! This crate decides which anchors on a rendered page are worth prerendering
//! next, canonicalizes them into comparable locations, and keeps a
//! deduplicated, append-only work queue for the crawl loop that drives the
//! renderer.

pub mod anchors;
pub mod config;
pub mod location;
pub mod queue;
pub mod state;

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{input}': {source}")]
    Parse {
        input: String,
        source: ::url::ParseError,
    },

    #[error("Failed to resolve '{href}' against '{base}': {source}")]
    Resolve {
        base: String,
        href: String,
        source: ::url::ParseError,
    },
}

/// Queue-specific errors
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("No queue entry at index {index} (queue length {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for queue operations
pub type QueueResult<T> = std::result::Result<T, QueueError>;

// Re-export commonly used types
pub use config::{Config, PrerenderConfig};
pub use location::{normalize_prerender_location, ErrorSink, PrerenderOptions, TracingSink};
pub use queue::{crawl_anchors_for_next_urls, get_prerender_queue, PrerenderQueue};
pub use state::{Anchor, LocationStatus, PageResults, PrerenderLocation};
