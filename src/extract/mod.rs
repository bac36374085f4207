//! Contact extraction over a crawled corpus
//!
//! Three independent extractors each scan every page body of a corpus:
//! - Email addresses
//! - Phone numbers
//! - Social-profile links (Facebook, Instagram, LinkedIn, Twitter/X)
//!
//! They are pure functions of their input and run only after the crawl of a
//! website has finished.

mod email;
mod phone;
mod social;

pub use email::extract_emails;
pub use phone::{extract_phones, normalize_phone, MIN_PHONE_LEN};
pub use social::{extract_social_profiles, SocialCategory, SocialProfiles};

use std::collections::BTreeSet;

/// Combined output of all extractors for one website
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSignals {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub social: SocialProfiles,
}

impl ContactSignals {
    /// Runs every extractor over the corpus
    ///
    /// # Arguments
    ///
    /// * `corpus` - Page bodies gathered for the website
    /// * `base_url` - The website's input URL, used to resolve social links
    pub fn from_corpus(corpus: &[String], base_url: &str) -> Self {
        Self {
            emails: extract_emails(corpus),
            phones: extract_phones(corpus),
            social: extract_social_profiles(corpus, base_url),
        }
    }

    /// Returns true if nothing at all was found
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.social.is_empty()
    }
}
