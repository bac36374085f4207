use crate::url::domain::origin_prefix;
use url::{Position, Url};

/// Resolves an href against the URL of the page it was found on
///
/// The result keeps the text it was built from as far as possible, so that
/// exact-string comparison of URLs behaves predictably:
/// - an href that is already an absolute URL is returned verbatim
/// - an empty href resolves to the base URL itself
/// - a scheme-relative href (`//host/path`) takes the base's scheme
/// - any other relative href keeps the base's `scheme://netloc` as written,
///   followed by the resolved path, query and fragment
///
/// Returns `None` when a relative href cannot be resolved (for instance
/// because the base URL does not parse).
///
/// # Examples
///
/// ```
/// use contact_gatherer::url::resolve_href;
///
/// assert_eq!(resolve_href("http://a.test", "http://a.test").as_deref(), Some("http://a.test"));
/// assert_eq!(resolve_href("http://a.test", "/about").as_deref(), Some("http://a.test/about"));
/// assert_eq!(resolve_href("http://A.test/x/", "y").as_deref(), Some("http://A.test/x/y"));
/// assert_eq!(resolve_href("not a url", "/about"), None);
/// ```
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return Some(base.to_string());
    }

    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    let base_url = Url::parse(base).ok()?;
    let joined = match base_url.join(href) {
        Ok(joined) => joined,
        Err(e) => {
            tracing::trace!("Skipping unresolvable href '{}': {}", href, e);
            return None;
        }
    };

    if href.starts_with("//") {
        return Some(format!("{}:{}", base_url.scheme(), href));
    }

    match origin_prefix(base) {
        Some(prefix) if joined.has_host() => {
            Some(format!("{}{}", prefix, &joined[Position::BeforePath..]))
        }
        _ => Some(joined.to_string()),
    }
}
