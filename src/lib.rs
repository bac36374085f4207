//! Contact Gatherer: a bounded same-domain contact crawler
//!
//! This crate crawls a handful of pages inside a single website, extracts
//! contact signals (email addresses, phone numbers, social-profile links) from
//! the collected markup and exports one record per website.

pub mod cli;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod gatherer;
pub mod input;
pub mod output;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for Contact Gatherer operations
#[derive(Debug, Error)]
pub enum GathererError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Export error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while reading the URL list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("No URLs found in input file '{0}'")]
    Empty(String),
}

/// Result type alias for Contact Gatherer operations
pub type Result<T> = std::result::Result<T, GathererError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Settings;
pub use crawler::{CrawlOutcome, Crawler};
pub use output::ExportFormat;
pub use record::ContactRecord;
