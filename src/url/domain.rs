/// Returns true if `text` is a valid URL scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
fn is_scheme(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

/// Extracts the network location (`[userinfo@]host[:port]`) exactly as written
///
/// No normalization takes place: the host keeps its case and an explicit
/// port is kept even when it is the scheme's default. URLs without a
/// network location (e.g. `mailto:` links or relative paths) yield `None`.
///
/// # Examples
///
/// ```
/// use contact_gatherer::url::netloc;
///
/// assert_eq!(netloc("https://example.com/path"), Some("example.com"));
/// assert_eq!(netloc("http://127.0.0.1:8080/"), Some("127.0.0.1:8080"));
/// assert_eq!(netloc("HTTP://Example.COM?q=1"), Some("Example.COM"));
/// assert_eq!(netloc("mailto:info@example.com"), None);
/// ```
pub fn netloc(url: &str) -> Option<&str> {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    };

    let rest = rest.strip_prefix("//")?;
    let end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    let location = &rest[..end];

    (!location.is_empty()).then_some(location)
}

/// Scheme and network location prefix of a URL (`scheme://netloc`)
///
/// The scheme is lower-cased, the network location is kept as written.
pub(crate) fn origin_prefix(url: &str) -> Option<String> {
    let (scheme, _) = url.split_once(':')?;
    if !is_scheme(scheme) {
        return None;
    }
    let location = netloc(url)?;
    Some(format!("{}://{}", scheme.to_ascii_lowercase(), location))
}
