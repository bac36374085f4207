//! URL handling module for Contact Gatherer
//!
//! This module provides href resolution, the same-site check used to keep a
//! crawl on one website, and the keyword test that decides which links are
//! crawled first. URLs are compared as the exact strings they were written
//! as; nothing here normalizes host case, default ports or trailing slashes.

mod domain;
mod matcher;
mod resolve;

// Re-export main functions
pub use domain::netloc;
pub use matcher::{is_priority_link, PRIORITY_KEYWORDS};
pub use resolve::resolve_href;

/// Scope of a discovered link relative to the crawl's base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Same network location as the base URL
    SameSite,
    /// Link carries no network location (e.g. `mailto:`); treated as same-site
    Hostless,
    /// Different network location - never followed
    External,
}

impl LinkScope {
    /// Returns true if the link may be added to the frontier
    pub fn is_followable(&self) -> bool {
        matches!(self, Self::SameSite | Self::Hostless)
    }
}

/// Classifies a link against the base URL's network location
///
/// The scheme and path are ignored; only the network location is compared,
/// and it must match character for character (`A.TEST` is not `a.test`). A
/// link without a network location is always in scope.
///
/// # Arguments
///
/// * `link` - The absolute link to classify
/// * `base_netloc` - Network location of the crawl's base URL, if it has one
///
/// # Examples
///
/// ```
/// use contact_gatherer::url::{classify_link, LinkScope};
///
/// let base = Some("a.test");
/// assert_eq!(classify_link("https://a.test/about", base), LinkScope::SameSite);
/// assert_eq!(classify_link("http://evil.test/x", base), LinkScope::External);
/// assert_eq!(classify_link("mailto:me@a.test", base), LinkScope::Hostless);
/// ```
pub fn classify_link(link: &str, base_netloc: Option<&str>) -> LinkScope {
    match netloc(link) {
        None => LinkScope::Hostless,
        Some(location) if Some(location) == base_netloc => LinkScope::SameSite,
        Some(_) => LinkScope::External,
    }
}
