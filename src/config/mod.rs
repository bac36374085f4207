//! Configuration module for Contact Gatherer
//!
//! This module handles loading, parsing, and validating the settings file.
//! Settings may be written as TOML or JSON; a broken or missing file never
//! aborts a run, it only falls back to the defaults.
//!
//! # Example
//!
//! ```no_run
//! use contact_gatherer::config::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Some(Path::new("config/settings.example.toml")));
//! println!("Crawler will fetch at most {} pages per site", settings.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Settings, SettingsFormat, DEFAULT_MAX_PAGES, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_settings, parse_settings, try_load_settings};
pub use validation::{sanitize, MAX_CONCURRENCY};
