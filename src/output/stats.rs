//! Run statistics over the exported records
//!
//! This module summarizes how many websites yielded each kind of contact,
//! for the end-of-run log line.

use crate::record::ContactRecord;

/// Per-run coverage summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of records produced
    pub total_records: usize,

    /// Records with at least one email address
    pub with_email: usize,

    /// Records with at least one phone number
    pub with_phone: usize,

    /// Records with at least one social-profile link of any kind
    pub with_social: usize,

    /// Records where nothing at all was found
    pub empty: usize,
}

impl RunStatistics {
    /// Tallies the records
    pub fn from_records(records: &[ContactRecord]) -> Self {
        let mut stats = RunStatistics {
            total_records: records.len(),
            ..Self::default()
        };

        for record in records {
            let has_email = !record.email.is_empty();
            let has_phone = !record.phone.is_empty();
            let has_social = !(record.facebook_profile.is_empty()
                && record.instagram_profile.is_empty()
                && record.linkedin_profile.is_empty()
                && record.twitter_x_profile.is_empty());

            stats.with_email += usize::from(has_email);
            stats.with_phone += usize::from(has_phone);
            stats.with_social += usize::from(has_social);
            stats.empty += usize::from(!(has_email || has_phone || has_social));
        }

        stats
    }
}

/// Logs the statistics at info level
pub fn log_statistics(stats: &RunStatistics) {
    tracing::info!(
        "Records: {} (email: {}, phone: {}, social: {}, nothing found: {})",
        stats.total_records,
        stats.with_email,
        stats.with_phone,
        stats.with_social,
        stats.empty
    );
}
