//! Frontier queue for a single crawl
//!
//! The frontier has two lanes folded into one deque: prioritized links are
//! pushed to the front, everything else to the back. A link prioritized later
//! is therefore crawled before one prioritized earlier.

use std::collections::VecDeque;

/// Pending URLs for one crawl, in traversal order
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
}

impl Frontier {
    /// Creates a frontier seeded with the crawl's base URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(seed.into());
        Self { queue }
    }

    /// Takes the next URL to crawl
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Queues a URL ahead of everything already pending
    pub fn push_prioritized(&mut self, url: String) {
        self.queue.push_front(url);
    }

    /// Queues a URL behind everything already pending
    pub fn push(&mut self, url: String) {
        self.queue.push_back(url);
    }

    /// Exact string membership test
    pub fn contains(&self, url: &str) -> bool {
        self.queue.iter().any(|queued| queued == url)
    }

    /// Number of pending URLs
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pending URLs in traversal order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}
