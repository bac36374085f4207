//! Social-profile link extraction
//!
//! Anchors are classified by an ordered table of categories; the first
//! category whose needle occurs in the lower-cased href wins, so each href
//! lands in at most one category.

use crate::crawler::anchor_hrefs;
use crate::url::resolve_href;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Social network a profile link belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SocialCategory {
    Facebook,
    Instagram,
    LinkedIn,
    TwitterX,
}

impl SocialCategory {
    /// All categories in classification priority order
    pub const ALL: [SocialCategory; 4] = [
        SocialCategory::Facebook,
        SocialCategory::Instagram,
        SocialCategory::LinkedIn,
        SocialCategory::TwitterX,
    ];

    /// Record field holding this category's links
    pub fn field_name(&self) -> &'static str {
        match self {
            SocialCategory::Facebook => "facebook_profile",
            SocialCategory::Instagram => "instagram_profile",
            SocialCategory::LinkedIn => "linkedin_profile",
            SocialCategory::TwitterX => "twitter_x_profile",
        }
    }

    /// Host fragments that identify this category
    fn needles(&self) -> &'static [&'static str] {
        match self {
            SocialCategory::Facebook => &["facebook.com"],
            SocialCategory::Instagram => &["instagram.com"],
            SocialCategory::LinkedIn => &["linkedin.com"],
            SocialCategory::TwitterX => &["twitter.com", "x.com"],
        }
    }

    /// Returns true if an already lower-cased href belongs to this category
    pub fn matches(&self, href_lower: &str) -> bool {
        self.needles()
            .iter()
            .any(|needle| href_lower.contains(needle))
    }

    /// Classifies an href, first match wins
    ///
    /// # Example
    ///
    /// ```
    /// use contact_gatherer::extract::SocialCategory;
    ///
    /// assert_eq!(
    ///     SocialCategory::classify("https://www.Facebook.com/acme"),
    ///     Some(SocialCategory::Facebook)
    /// );
    /// assert_eq!(SocialCategory::classify("https://x.com/acme"), Some(SocialCategory::TwitterX));
    /// assert_eq!(SocialCategory::classify("/about"), None);
    /// ```
    pub fn classify(href: &str) -> Option<SocialCategory> {
        let lowered = href.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.matches(&lowered))
    }
}

/// Profile links found for one website, grouped by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialProfiles {
    links: BTreeMap<SocialCategory, BTreeSet<String>>,
}

impl Default for SocialProfiles {
    fn default() -> Self {
        Self {
            links: SocialCategory::ALL
                .into_iter()
                .map(|category| (category, BTreeSet::new()))
                .collect(),
        }
    }
}

impl SocialProfiles {
    /// Links collected for a category, sorted
    pub fn get(&self, category: SocialCategory) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.links.get(&category).unwrap_or(&EMPTY)
    }

    /// Adds a link to a category
    pub fn insert(&mut self, category: SocialCategory, link: String) -> bool {
        self.links.entry(category).or_default().insert(link)
    }

    /// Total number of links across all categories
    pub fn len(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    /// Returns true if no category holds a link
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories with their links, in category order
    pub fn iter(&self) -> impl Iterator<Item = (SocialCategory, &BTreeSet<String>)> {
        self.links.iter().map(|(category, links)| (*category, links))
    }
}

/// Makes an href absolute against the website's base URL
///
/// Hrefs that are already absolute URLs are kept verbatim. If the href
/// cannot be resolved it is returned unchanged.
fn absolutize(href: &str, base_url: &str) -> String {
    resolve_href(base_url, href).unwrap_or_else(|| href.to_string())
}

/// Extracts social-profile links from every page of a corpus
///
/// Relative hrefs are resolved against `base_url`, the website's input URL,
/// and not against the page they were found on.
///
/// # Example
///
/// ```
/// use contact_gatherer::extract::{extract_social_profiles, SocialCategory};
///
/// let corpus = vec![r#"<a href="https://www.facebook.com/acme">fb</a>"#.to_string()];
/// let profiles = extract_social_profiles(&corpus, "http://acme.test");
/// assert!(profiles
///     .get(SocialCategory::Facebook)
///     .contains("https://www.facebook.com/acme"));
/// ```
pub fn extract_social_profiles(corpus: &[String], base_url: &str) -> SocialProfiles {
    let mut profiles = SocialProfiles::default();

    for html in corpus.iter().filter(|html| !html.is_empty()) {
        for href in anchor_hrefs(html) {
            let href = href.trim();
            if let Some(category) = SocialCategory::classify(href) {
                profiles.insert(category, absolutize(href, base_url));
            }
        }
    }

    tracing::debug!("Extracted {} social profile links", profiles.len());
    profiles
}
