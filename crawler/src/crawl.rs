//! Bounded-depth, depth-first crawl of repository item pages.
//!
//! Traversal uses an explicit stack instead of recursion. Each frame holds the
//! links of one fetched page that have not been looked at yet, the authors shown
//! on that page, and the depth left for its children. Records come out in the
//! same order a recursive walk would produce them.

use crate::extract::extract;
use crate::fetcher::PageFetcher;
use crate::validator::is_valid;
use authindex::CollectedRecord;
use std::collections::HashSet;
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub records: usize,
}

struct Frame {
    links: std::vec::IntoIter<String>,
    authors: Vec<String>,
    depth: usize,
}

/// Owns the state of one crawl session: visited URLs and collected records.
pub struct Crawler<F> {
    fetcher: F,
    visited: HashSet<String>,
    records: Vec<CollectedRecord>,
    stats: CrawlStats,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, visited: HashSet::new(), records: Vec::new(), stats: CrawlStats::default() }
    }

    /// Visit `seed` and every valid item page reachable within `max_depth` hops.
    ///
    /// Fetch failures are logged and end that branch only. A URL already visited
    /// in this session, at any depth, is not fetched again.
    pub async fn crawl(&mut self, seed: &str, max_depth: usize) {
        let before = self.records.len();
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.visit(seed, max_depth).await {
            stack.push(frame);
        }

        while let Some(top) = stack.last_mut() {
            let Some(link) = top.links.next() else {
                stack.pop();
                continue;
            };
            if !is_valid(&link) {
                continue;
            }
            let depth = top.depth;
            self.records.push(CollectedRecord::new(link.clone(), top.authors.clone()));
            self.stats.records += 1;
            if let Some(frame) = self.visit(&link, depth - 1).await {
                stack.push(frame);
            }
        }

        tracing::info!(
            seed,
            max_depth,
            new_records = self.records.len() - before,
            visited = self.visited.len(),
            "seed crawled"
        );
    }

    /// Fetch one page and turn it into a frame, or `None` when there is
    /// nothing to descend into.
    async fn visit(&mut self, url: &str, depth: usize) -> Option<Frame> {
        if depth == 0 || self.visited.contains(url) {
            return None;
        }
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                // left unvisited so a later pass may try again
                tracing::warn!(url, error = %e, "fetch failed");
                self.stats.fetch_failures += 1;
                return None;
            }
        };
        self.visited.insert(url.to_string());
        self.stats.pages_fetched += 1;

        let base = match Url::parse(&page.final_url).or_else(|_| Url::parse(url)) {
            Ok(base) => base,
            Err(e) => {
                tracing::warn!(url, error = %e, "page has no usable base url");
                return None;
            }
        };
        let extracted = extract(&page.body, &base);
        tracing::debug!(url, links = extracted.links.len(), authors = extracted.authors.len(), "page parsed");
        Some(Frame { links: extracted.links.into_iter(), authors: extracted.authors, depth })
    }

    pub fn records(&self) -> &[CollectedRecord] { &self.records }

    pub fn visited(&self) -> &HashSet<String> { &self.visited }

    pub fn is_visited(&self, url: &str) -> bool { self.visited.contains(url) }

    pub fn stats(&self) -> CrawlStats { self.stats }

    pub fn into_records(self) -> Vec<CollectedRecord> { self.records }
}
