use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "WebsiteContactGathererBot/1.0 (+https://bitbash.dev)";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT: f64 = 10.0;

/// Default page budget per base URL
pub const DEFAULT_MAX_PAGES: usize = 5;

/// Runtime settings for a gathering run
///
/// Every key is optional in the configuration file; missing keys keep their
/// defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Total timeout for a single request, in seconds
    pub request_timeout: f64,

    /// Maximum number of distinct URLs fetched per base URL
    pub max_pages: usize,

    /// Number of base URLs crawled at the same time
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
            concurrency: 1,
        }
    }
}

impl Settings {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.request_timeout)
    }
}

/// Serialization format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Json,
}

impl SettingsFormat {
    /// Picks the format from a file extension (`.json` is JSON, anything else TOML)
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SettingsFormat::Json,
            _ => SettingsFormat::Toml,
        }
    }
}
