//! Per-website pipeline and the run over all input URLs
//!
//! Each website is crawled to completion, then the three extractors run over
//! the whole corpus and the result record is assembled. Websites share no
//! mutable state, so several of them may be in flight at once; the number is
//! bounded by `concurrency` and records always come back in input order.

use crate::config::Settings;
use crate::crawler::{Crawler, Fetch};
use crate::extract::ContactSignals;
use crate::record::ContactRecord;
use crate::GathererError;
use futures::stream::{self, StreamExt};

/// Crawls one website and builds its record
///
/// A crawl that gathers no pages still yields a record, with every contact
/// field empty.
pub async fn process_url<F: Fetch>(crawler: &Crawler<F>, url: &str) -> ContactRecord {
    tracing::info!("Processing URL: {}", url);

    let outcome = crawler.crawl(url).await;
    if outcome.corpus.is_empty() {
        tracing::warn!("No HTML pages retrieved for URL: {}", url);
    }

    let record = ContactSignals::from_corpus(&outcome.corpus, url).into_record(url);
    tracing::debug!("Result for {}: {:?}", url, record);
    record
}

/// Processes every URL with an already built crawler
///
/// At most `concurrency` websites are crawled at the same time. Records are
/// returned in the order of `urls`.
pub async fn gather_with<F: Fetch>(
    crawler: &Crawler<F>,
    urls: &[String],
    concurrency: usize,
) -> Vec<ContactRecord> {
    stream::iter(urls)
        .map(|url| process_url(crawler, url))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Processes every URL over HTTP using the run settings
///
/// # Returns
///
/// * `Ok(Vec<ContactRecord>)` - One record per input URL, in input order
/// * `Err(GathererError)` - The HTTP client could not be built
pub async fn gather_all(
    urls: &[String],
    settings: &Settings,
) -> Result<Vec<ContactRecord>, GathererError> {
    let crawler = Crawler::from_settings(settings)?;

    tracing::info!(
        "Gathering contacts from {} URLs (max {} pages each, {} at a time)",
        urls.len(),
        settings.max_pages,
        settings.concurrency
    );

    Ok(gather_with(&crawler, urls, settings.concurrency).await)
}
