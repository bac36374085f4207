//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Error classification
//!
//! Every URL gets exactly one attempt. Failures are logged and reported as a
//! [`FetchResult`] variant; they never abort the crawl.

use crate::config::Settings;
use reqwest::Client;
use std::future::Future;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body decoding, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the page body for a successful fetch
    pub fn into_body(self) -> Option<String> {
        match self {
            FetchResult::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the fetch produced markup
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }
}

/// Source of page markup for the crawler
///
/// The production implementation is [`HttpFetcher`]; tests drive the crawler
/// with scripted implementations.
pub trait Fetch {
    /// Fetches a single URL, never retrying
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `settings` - The run settings (user agent and request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use contact_gatherer::config::Settings;
/// use contact_gatherer::crawler::build_http_client;
///
/// let client = build_http_client(&Settings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &Settings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single attempt
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError |
/// | Connection refused | NetworkError |
/// | Invalid URL / unsupported scheme | NetworkError |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = classify_error(&e);
            tracing::warn!("Failed to fetch URL '{}': {}", url, error);
            return FetchResult::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Failed to fetch URL '{}': HTTP {}", url, status.as_u16());
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();

    match response.text().await {
        Ok(body) => {
            tracing::debug!("Fetched URL: {} (status {})", url, status.as_u16());
            FetchResult::Success {
                final_url,
                status_code: status.as_u16(),
                body,
            }
        }
        Err(e) => {
            let error = classify_error(&e);
            tracing::warn!("Failed to read body of '{}': {}", url, error);
            FetchResult::NetworkError { error }
        }
    }
}

/// Turns a reqwest error into a short readable message
fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else if e.is_builder() {
        format!("Invalid request: {}", e)
    } else {
        e.to_string()
    }
}

/// Fetcher backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the settings and wraps it
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(settings)?))
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}
