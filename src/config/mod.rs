//! Configuration module for Prerender-Queue
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use prerender_queue::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("prerender.toml")).unwrap();
//! println!("Seed paths: {}", config.prerender.include.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, IncludeEntry, PrerenderConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
