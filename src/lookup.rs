//! Dictionary membership strategies and their timing comparison.

use crate::report::serialize_nanos;
use crate::set::BucketSet;
use crate::token::Token;
use serde::Serialize;
use std::time::{Duration, Instant};

/// A structure that can answer "is this word in the dictionary?".
pub trait Membership {
    /// Short label used in reports.
    fn name(&self) -> &'static str;

    fn contains(&self, token: &Token) -> bool;
}

/// Unsorted word list searched front to back.
#[derive(Debug, Clone)]
pub struct LinearList(Vec<Token>);

impl LinearList {
    pub const fn new(words: Vec<Token>) -> Self {
        Self(words)
    }
}

impl Membership for LinearList {
    fn name(&self) -> &'static str {
        "linear scan"
    }

    fn contains(&self, token: &Token) -> bool {
        self.0.contains(token)
    }
}

/// Word list sorted by text and searched by bisection.
#[derive(Debug, Clone)]
pub struct SortedList(Vec<Token>);

impl SortedList {
    /// Sorts and deduplicates `words`.
    pub fn new(mut words: Vec<Token>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self(words)
    }
}

impl Membership for SortedList {
    fn name(&self) -> &'static str {
        "binary search"
    }

    fn contains(&self, token: &Token) -> bool {
        self.0.binary_search(token).is_ok()
    }
}

impl Membership for BucketSet<Token> {
    fn name(&self) -> &'static str {
        "bucket set"
    }

    fn contains(&self, token: &Token) -> bool {
        BucketSet::contains(self, token)
    }
}

/// Outcome of checking every word against one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct LookupTiming {
    pub strategy: &'static str,
    pub missing: usize,
    #[serde(serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
}

/// Counts words absent from each strategy, timing each pass separately.
pub fn compare<'a>(
    strategies: &[&dyn Membership],
    words: impl Iterator<Item = &'a Token> + Clone,
) -> Vec<LookupTiming> {
    let timings: Vec<_> = strategies
        .iter()
        .map(|strategy| {
            let start = Instant::now();
            let missing = words.clone().filter(|word| !strategy.contains(word)).count();
            let elapsed = start.elapsed();
            tracing::debug!(
                "{}: {} words missing in {:?}",
                strategy.name(),
                missing,
                elapsed
            );
            LookupTiming {
                strategy: strategy.name(),
                missing,
                elapsed,
            }
        })
        .collect();

    if let Some(first) = timings.first()
        && timings.iter().any(|timing| timing.missing != first.missing)
    {
        tracing::warn!("Lookup strategies disagree on missing word counts: {:?}", timings);
    }

    timings
}
