use crate::tokenizer::{normalize_author, normalize_query, tokenize};
use crate::CollectedRecord;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct AuthorEntry {
    author: String,
    urls: Vec<String>, // every occurrence, duplicates kept
    token_counts: HashMap<String, u64>,
}

/// One ranked author returned by [`InvertedIndex::search_scored`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAuthor {
    pub author: String,
    pub score: u64,
    pub urls: Vec<String>,
}

/// Maps normalized author names to the URLs they were observed on.
///
/// Authors keep the order in which they were first indexed; that order breaks
/// ties when ranking. Indexing only ever appends.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    entries: Vec<AuthorEntry>,
    positions: HashMap<String, usize>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn index_all<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a CollectedRecord>,
    {
        let mut indexed = 0usize;
        for record in records {
            self.index_page(&record.url, &record.authors);
            indexed += 1;
        }
        tracing::info!(records = indexed, authors = self.entries.len(), "indexed collected records");
    }

    /// Record `url` once for every author occurrence in `authors`.
    pub fn index_page(&mut self, url: &str, authors: &[String]) {
        for raw in authors {
            let key = normalize_author(raw);
            let entry = self.entry_mut(key);
            entry.urls.push(url.to_string());
            for token in tokenize(&entry.author) {
                *entry.token_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    fn entry_mut(&mut self, key: String) -> &mut AuthorEntry {
        let pos = match self.positions.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.positions.insert(key.clone(), pos);
                self.entries.push(AuthorEntry { author: key, ..Default::default() });
                pos
            }
        };
        &mut self.entries[pos]
    }

    /// Rank authors against `term`.
    ///
    /// A query token matches an author token when it is a substring of it; each
    /// match adds that author token's count. Several query tokens matching the
    /// same author token each add the count again. Authors with no match are
    /// left out; equal scores keep index order.
    pub fn search_scored(&self, term: &str) -> Vec<ScoredAuthor> {
        let query_tokens = tokenize(&normalize_query(term));
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, u64)> = Vec::new();
        for (pos, entry) in self.entries.iter().enumerate() {
            let author_tokens = tokenize(&entry.author);
            let mut score = 0u64;
            for q in &query_tokens {
                for a in &author_tokens {
                    if a.contains(q.as_str()) {
                        score += entry.token_counts.get(a).copied().unwrap_or(0);
                    }
                }
            }
            if score > 0 {
                scored.push((pos, score));
            }
        }

        // stable: ties stay in insertion order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
            .into_iter()
            .map(|(pos, score)| {
                let entry = &self.entries[pos];
                ScoredAuthor { author: entry.author.clone(), score, urls: entry.urls.clone() }
            })
            .collect()
    }

    /// URLs of every matching author, concatenated in rank order.
    pub fn search(&self, term: &str) -> Vec<String> {
        self.search_scored(term).into_iter().flat_map(|s| s.urls).collect()
    }

    pub fn urls_for(&self, author: &str) -> Option<&[String]> {
        self.positions.get(author).map(|&pos| self.entries[pos].urls.as_slice())
    }

    pub fn token_count(&self, author: &str, token: &str) -> u64 {
        self.positions
            .get(author)
            .and_then(|&pos| self.entries[pos].token_counts.get(token).copied())
            .unwrap_or(0)
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.author.as_str())
    }

    pub fn author_count(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
