//! Email address extraction

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `local-part@domain` with at least one dot in the domain
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9.!#$%\&'*+/=?^_`{|}\~\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+")
        .expect("email pattern is valid")
});

/// Characters stripped from both ends of every match
const TRIM_CHARS: &[char] = &['.', ',', ';', ':', ' ', ')', ']', '>', '"', '\''];

/// Extracts email addresses from every page of a corpus
///
/// Matches are trimmed of surrounding punctuation, brackets and quotes, but
/// otherwise kept as found (no case folding, no validation).
///
/// # Example
///
/// ```
/// use contact_gatherer::extract::extract_emails;
///
/// let corpus = vec!["Write to <a>sales@acme.test</a>.".to_string()];
/// let emails = extract_emails(&corpus);
/// assert!(emails.contains("sales@acme.test"));
/// ```
pub fn extract_emails(corpus: &[String]) -> BTreeSet<String> {
    let mut emails = BTreeSet::new();

    for html in corpus.iter().filter(|html| !html.is_empty()) {
        for found in EMAIL_REGEX.find_iter(html) {
            let email = found.as_str().trim_matches(TRIM_CHARS);
            if !email.is_empty() {
                emails.insert(email.to_string());
            }
        }
    }

    tracing::debug!("Extracted {} email addresses", emails.len());
    emails
}
