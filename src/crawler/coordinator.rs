//! Crawler coordinator - bounded same-domain crawl of one website
//!
//! This module contains the crawl loop that coordinates:
//! - Popping URLs from the frontier and tracking the visited set
//! - Fetching pages and collecting their markup
//! - Extracting links and deciding which ones enter the frontier
//!
//! All state lives inside a single [`Crawler::crawl`] call; nothing is shared
//! between crawls of different base URLs.

use crate::config::Settings;
use crate::crawler::fetcher::{Fetch, HttpFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_links;
use crate::url::{classify_link, is_priority_link, netloc};
use std::collections::HashSet;

/// Everything a crawl of one base URL produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Markup of every successfully fetched page, in fetch order
    pub corpus: Vec<String>,

    /// Every URL marked visited, in the order it was popped
    pub visited: Vec<String>,
}

impl CrawlOutcome {
    /// Number of pages that produced markup
    pub fn pages_fetched(&self) -> usize {
        self.corpus.len()
    }
}

/// Bounded crawler restricted to the base URL's network location
pub struct Crawler<F> {
    fetcher: F,
    max_pages: usize,
}

impl Crawler<HttpFetcher> {
    /// Creates an HTTP-backed crawler from the run settings
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            HttpFetcher::from_settings(settings)?,
            settings.max_pages,
        ))
    }
}

impl<F: Fetch> Crawler<F> {
    /// Creates a crawler with the given fetcher and page budget
    pub fn new(fetcher: F, max_pages: usize) -> Self {
        Self { fetcher, max_pages }
    }

    /// Page budget per crawl
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Crawls up to `max_pages` pages starting from `base_url`
    ///
    /// # Crawl Loop
    ///
    /// 1. Pop the front of the frontier; skip it if already visited
    /// 2. Mark it visited (failed fetches count against the budget too)
    /// 3. Fetch it; on failure or an empty body move on without touching the corpus
    /// 4. Append the markup to the corpus and extract its links
    /// 5. Admit links until `visited + frontier` reaches the budget
    ///
    /// The loop ends when the frontier is empty or the visited set has
    /// reached the budget.
    pub async fn crawl(&self, base_url: &str) -> CrawlOutcome {
        let base_netloc = netloc(base_url);

        let mut visited: HashSet<String> = HashSet::new();
        let mut outcome = CrawlOutcome::default();
        let mut frontier = Frontier::with_seed(base_url);

        while visited.len() < self.max_pages {
            let Some(url) = frontier.pop() else {
                break;
            };

            if visited.contains(&url) {
                continue;
            }
            visited.insert(url.clone());
            outcome.visited.push(url.clone());

            let Some(body) = self.fetcher.fetch(&url).await.into_body() else {
                continue;
            };
            if body.is_empty() {
                tracing::debug!("Empty response body for {}", url);
                continue;
            }

            let links = extract_links(&url, &body);
            outcome.corpus.push(body);

            self.admit_links(
                links,
                base_netloc,
                &visited,
                &mut frontier,
            );
        }

        tracing::info!(
            "Crawled {} pages for base URL '{}'",
            outcome.pages_fetched(),
            base_url
        );

        outcome
    }

    /// Adds a page's links to the frontier
    ///
    /// The budget is checked before each link, ahead of any filtering, so a
    /// page's later links are dropped once the budget is used up even if
    /// earlier ones were rejected.
    fn admit_links(
        &self,
        links: Vec<String>,
        base_netloc: Option<&str>,
        visited: &HashSet<String>,
        frontier: &mut Frontier,
    ) {
        for link in links {
            if visited.len() + frontier.len() >= self.max_pages {
                break;
            }

            if !classify_link(&link, base_netloc).is_followable() {
                tracing::trace!("Rejecting off-site link {}", link);
                continue;
            }

            if visited.contains(&link) || frontier.contains(&link) {
                continue;
            }

            if is_priority_link(&link) {
                tracing::trace!("Prioritizing {}", link);
                frontier.push_prioritized(link);
            } else {
                frontier.push(link);
            }
        }
    }
}
