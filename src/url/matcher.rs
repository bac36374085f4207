/// Substrings that mark a link as likely to lead to contact details
pub const PRIORITY_KEYWORDS: [&str; 4] = ["contact", "about", "support", "impressum"];

/// Checks if a link should jump the frontier queue
///
/// The whole URL text is searched case-insensitively for any of
/// [`PRIORITY_KEYWORDS`], so a keyword in the host or the query string counts
/// as well as one in the path.
///
/// # Examples
///
/// ```
/// use contact_gatherer::url::is_priority_link;
///
/// assert!(is_priority_link("https://example.com/Contact-Us"));
/// assert!(is_priority_link("https://example.com/de/impressum"));
/// assert!(!is_priority_link("https://example.com/blog"));
/// ```
pub fn is_priority_link(url: &str) -> bool {
    let lowered = url.to_lowercase();
    PRIORITY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
