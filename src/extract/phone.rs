//! Phone number extraction
//!
//! This is a heuristic: any long enough run of digits, optionally broken up
//! by spaces, hyphens, dots or parentheses, is taken for a phone number.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Optional `+` and country code, then at least seven digit groups
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[\s\-.()]*)?(?:[0-9][\s\-.()]*){7,}")
        .expect("phone pattern is valid")
});

/// Shortest normalized number kept, counting a leading `+`
pub const MIN_PHONE_LEN: usize = 9;

/// Keeps digits plus a `+` that opens the raw match
///
/// # Example
///
/// ```
/// use contact_gatherer::extract::normalize_phone;
///
/// assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
/// assert_eq!(normalize_phone("030 / 12+34"), "0301234");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.trim()
        .chars()
        .enumerate()
        .filter(|&(i, ch)| ch.is_ascii_digit() || (ch == '+' && i == 0))
        .map(|(_, ch)| ch)
        .collect()
}

/// Extracts normalized phone numbers from every page of a corpus
pub fn extract_phones(corpus: &[String]) -> BTreeSet<String> {
    let mut phones = BTreeSet::new();

    for html in corpus.iter().filter(|html| !html.is_empty()) {
        for found in PHONE_REGEX.find_iter(html) {
            let phone = normalize_phone(found.as_str());
            if phone.len() >= MIN_PHONE_LEN {
                phones.insert(phone);
            }
        }
    }

    tracing::debug!("Extracted {} phone numbers", phones.len());
    phones
}
