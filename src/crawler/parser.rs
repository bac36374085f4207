//! HTML parser for extracting outbound links
//!
//! Links are taken from `<a href>` elements and resolved against the URL of
//! the page they were found on, so relative links on pages served from
//! different paths resolve correctly. Absolute hrefs come back exactly as
//! written.

use crate::url::resolve_href;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| Selector::parse("a[href]").ok());

/// Collects the raw `href` value of every anchor in the document, in order
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let Some(selector) = ANCHOR_SELECTOR.as_ref() else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Extracts all links from a page as absolute URLs
///
/// Each href is resolved against `page_url` with [`resolve_href`]. Hrefs that
/// cannot be resolved are dropped; no scheme filtering is applied, so
/// `mailto:` and `tel:` links come back as host-less absolute URLs. When the
/// page URL does not parse only already absolute hrefs survive.
///
/// # Arguments
///
/// * `page_url` - The URL the markup was fetched from
/// * `html` - The HTML content
///
/// # Returns
///
/// Absolute URLs in document order, duplicates included
///
/// # Example
///
/// ```
/// use contact_gatherer::crawler::extract_links;
///
/// let html = r#"<html><body><a href="team">Team</a></body></html>"#;
/// let links = extract_links("https://example.com/about/", html);
/// assert_eq!(links, vec!["https://example.com/about/team".to_string()]);
/// ```
pub fn extract_links(page_url: &str, html: &str) -> Vec<String> {
    let links: Vec<String> = anchor_hrefs(html)
        .iter()
        .filter_map(|href| resolve_href(page_url, href))
        .collect();

    tracing::trace!("Extracted {} links from '{}'", links.len(), page_url);
    links
}
