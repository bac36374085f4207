//! Per-website result record
//!
//! A [`ContactRecord`] is the fixed-shape output for one input URL. Every
//! contact field holds the category's members sorted and joined with `"; "`,
//! or an empty string when nothing was found. Extra string fields may be
//! attached and are serialized alongside the fixed ones.

use crate::extract::{ContactSignals, SocialCategory, SocialProfiles};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Fixed record fields, in export order
pub const BASE_FIELDS: [&str; 7] = [
    "url",
    "email",
    "phone",
    "facebook_profile",
    "instagram_profile",
    "linkedin_profile",
    "twitter_x_profile",
];

/// Separator between members of one contact field
pub const FIELD_SEPARATOR: &str = "; ";

/// Contact details gathered for one website
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub url: String,
    pub email: String,
    pub phone: String,
    pub facebook_profile: String,
    pub instagram_profile: String,
    pub linkedin_profile: String,
    pub twitter_x_profile: String,

    /// Additional fields, serialized next to the fixed ones
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ContactRecord {
    /// Looks up a field by its serialized name
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "url" => &self.url,
            "email" => &self.email,
            "phone" => &self.phone,
            "facebook_profile" => &self.facebook_profile,
            "instagram_profile" => &self.instagram_profile,
            "linkedin_profile" => &self.linkedin_profile,
            "twitter_x_profile" => &self.twitter_x_profile,
            other => return self.extra.get(other).map(String::as_str),
        };
        Some(value.as_str())
    }

    /// Attaches an extra field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Joins a set's members in lexicographic order
pub fn join_sorted(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Builds the result record for one website
///
/// # Example
///
/// ```
/// use contact_gatherer::extract::SocialProfiles;
/// use contact_gatherer::record::build_record;
/// use std::collections::BTreeSet;
///
/// let emails: BTreeSet<String> = ["b@x.test", "a@x.test"].iter().map(|s| s.to_string()).collect();
/// let record = build_record("http://x.test", &emails, &BTreeSet::new(), &SocialProfiles::default());
/// assert_eq!(record.email, "a@x.test; b@x.test");
/// assert_eq!(record.phone, "");
/// ```
pub fn build_record(
    url: &str,
    emails: &BTreeSet<String>,
    phones: &BTreeSet<String>,
    social: &SocialProfiles,
) -> ContactRecord {
    ContactRecord {
        url: url.to_string(),
        email: join_sorted(emails),
        phone: join_sorted(phones),
        facebook_profile: join_sorted(social.get(SocialCategory::Facebook)),
        instagram_profile: join_sorted(social.get(SocialCategory::Instagram)),
        linkedin_profile: join_sorted(social.get(SocialCategory::LinkedIn)),
        twitter_x_profile: join_sorted(social.get(SocialCategory::TwitterX)),
        extra: BTreeMap::new(),
    }
}

impl ContactSignals {
    /// Turns the extracted signals into a result record
    pub fn into_record(self, url: &str) -> ContactRecord {
        build_record(url, &self.emails, &self.phones, &self.social)
    }
}

/// Column names for tabular export
///
/// The seven fixed fields come first, followed by every extra key present in
/// any record, sorted.
pub fn field_names(records: &[ContactRecord]) -> Vec<String> {
    let extras: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.extra.keys().map(String::as_str))
        .filter(|key| !BASE_FIELDS.contains(key))
        .collect();

    BASE_FIELDS
        .iter()
        .copied()
        .chain(extras)
        .map(str::to_string)
        .collect()
}
