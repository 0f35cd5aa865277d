//! Word frequency counting over a token stream.

use crate::token::Token;
use ahash::AHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// A token and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRecord {
    pub token: Token,
    pub count: usize,
}

/// Counts of every distinct token in a stream.
///
/// Records are kept in first-sighting order; `slots` maps a token to its
/// record so each sighting is an O(1) update.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    records: Vec<FrequencyRecord>,
    slots: AHashMap<Token, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from every token in `tokens`.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Counts one sighting of `token`.
    pub fn record(&mut self, token: &Token) {
        if let Some(&slot) = self.slots.get(token) {
            self.records[slot].count += 1;
            return;
        }

        self.slots.insert(token.clone(), self.records.len());
        self.records.push(FrequencyRecord {
            token: token.clone(),
            count: 1,
        });
    }

    pub fn count_of(&self, token: &Token) -> Option<usize> {
        self.slots.get(token).map(|&slot| self.records[slot].count)
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    pub fn total_count(&self) -> usize {
        self.records.iter().map(|record| record.count).sum()
    }

    /// Number of distinct tokens.
    pub fn unique_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[FrequencyRecord] {
        &self.records
    }

    /// The `n` most frequent records, ties broken alphabetically.
    pub fn top(&self, n: usize) -> Vec<&FrequencyRecord> {
        let mut ranked: Vec<_> = self.records.iter().collect();
        ranked.sort_by(|a, b| by_count_then_text(a, b));
        ranked.truncate(n);
        ranked
    }

    /// Records seen exactly `count` times, alphabetically.
    pub fn with_count(&self, count: usize) -> Vec<&FrequencyRecord> {
        let mut matching: Vec<_> = self
            .records
            .iter()
            .filter(|record| record.count == count)
            .collect();
        matching.sort_by(|a, b| a.token.cmp(&b.token));
        matching
    }
}

/// Orders by count descending, then by text ascending.
pub fn by_count_then_text(a: &FrequencyRecord, b: &FrequencyRecord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
}
