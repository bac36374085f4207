//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a single attempt per URL
//! - HTML parsing and link extraction
//! - The two-lane frontier queue
//! - Overall crawl coordination for one base URL

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlOutcome, Crawler};
pub use fetcher::{build_http_client, fetch_url, Fetch, FetchResult, HttpFetcher};
pub use frontier::Frontier;
pub use parser::{anchor_hrefs, extract_links};
