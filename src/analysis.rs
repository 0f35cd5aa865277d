//! Run orchestration: load inputs, build every structure, collect a report.
//!
//! The orchestrator owns all structures for the duration of a run. The three
//! analyses are independent, so each runs on its own blocking worker with
//! either an `Arc` view of the corpus or sole ownership of what it builds.

use crate::config::Config;
use crate::corpus::{load_corpus, load_word_list};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::lookup::{self, LinearList, Membership, SortedList};
use crate::position::PositionIndex;
use crate::proximity::{self, ProximityResult};
use crate::report::Report;
use crate::set::BucketSet;
use crate::token::Token;
use anyhow::Context;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// The dictionary in each of its lookup representations.
struct Dictionary {
    linear: LinearList,
    sorted: SortedList,
    set: BucketSet<Token>,
}

impl Dictionary {
    fn build(words: Vec<Token>) -> Self {
        let start = Instant::now();
        let set: BucketSet<Token> = words.iter().cloned().collect();
        let dictionary = Self {
            linear: LinearList::new(words.clone()),
            sorted: SortedList::new(words),
            set,
        };
        info!(
            "Built dictionary set: {} words, {} buckets in {:?}",
            dictionary.set.len(),
            dictionary.set.bucket_count(),
            start.elapsed()
        );
        dictionary
    }

    fn strategies(&self) -> [&dyn Membership; 3] {
        [&self.linear, &self.sorted, &self.set]
    }
}

/// Runs every analysis described by `config` and returns the combined report.
pub async fn run(config: &Config) -> Result<Report> {
    config.validate().context("Invalid configuration")?;

    let (words, corpus) = tokio::try_join!(
        load_word_list(&config.dictionary),
        load_corpus(&config.corpus)
    )?;
    analyze(config, words, corpus).await
}

/// Analyzes already-tokenized inputs.
pub async fn analyze(config: &Config, words: Vec<Token>, corpus: Arc<[Token]>) -> Result<Report> {
    let anchor = config.anchor_token();
    let tracked = config.tracked_tokens();
    let window = config.window;

    let dictionary = tokio::task::spawn_blocking(move || Dictionary::build(words));

    let frequency = {
        let corpus = Arc::clone(&corpus);
        tokio::task::spawn_blocking(move || {
            FrequencyTable::from_tokens(corpus.iter().filter(|token| !token.is_empty()))
        })
    };

    let proximity = {
        let corpus = Arc::clone(&corpus);
        let anchor = anchor.clone();
        tokio::task::spawn_blocking(move || score_proximity(&corpus, &anchor, &tracked, window))
    };

    let (dictionary, frequency, (proximity, proximity_elapsed)) =
        tokio::try_join!(dictionary, frequency, proximity).context("Analysis worker panicked")?;

    info!(
        "Counted {} words ({} unique)",
        frequency.total_count(),
        frequency.unique_count()
    );

    let (frequency, dictionary, lookups) = tokio::task::spawn_blocking(move || {
        let words = frequency.records().iter().map(|record| &record.token);
        let lookups = lookup::compare(&dictionary.strategies(), words);
        (frequency, dictionary, lookups)
    })
    .await
    .context("Lookup comparison panicked")?;

    Ok(Report {
        total_words: frequency.total_count(),
        unique_words: frequency.unique_count(),
        top_words: frequency.top(config.top).into_iter().cloned().collect(),
        exact_count: config.exact_count,
        words_with_exact_count: frequency
            .with_count(config.exact_count)
            .into_iter()
            .cloned()
            .collect(),
        lookups,
        dictionary: dictionary.set.stats(),
        anchor,
        window,
        proximity,
        proximity_elapsed,
    })
}

fn score_proximity(
    corpus: &[Token],
    anchor: &Token,
    tracked: &[Token],
    window: usize,
) -> (Vec<ProximityResult>, Duration) {
    let tracked_set: BucketSet<Token> = tracked.iter().cloned().collect();
    let index = PositionIndex::index_stream(corpus, anchor, |token| tracked_set.contains(token));

    let start = Instant::now();
    let results = proximity::compute(&index, tracked, window);
    let elapsed = start.elapsed();

    info!(
        "Scored {} tracked tokens against {} anchor occurrences in {:?}",
        results.len(),
        index.anchor_positions().len(),
        elapsed
    );
    (results, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{split_corpus_raw, split_word_list};
    use assert2::check;

    fn config(tracked: &[&str]) -> Config {
        Config {
            tracked: tracked.iter().map(ToString::to_string).collect(),
            top: 3,
            exact_count: 2,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_analyze_small_corpus() {
        let words = split_word_list("the ring sam went to");
        let corpus: Arc<[Token]> =
            split_corpus_raw("Sam went to the Ring. Frodo, the ring-bearer, went home.").into();

        let report = analyze(&config(&["frodo", "sam", "gollum"]), words, corpus)
            .await
            .unwrap();

        check!(report.total_words == 11);
        check!(report.unique_words == 8);
        let top: Vec<_> = report.top_words.iter().map(|r| r.token.as_str()).collect();
        check!(top == ["ring", "the", "went"]);
        // "frodo", "bearer", "home"; the empty tokens are neither counted nor looked up
        check!(report.lookups.iter().all(|timing| timing.missing == 3));
        check!(report.dictionary.size == 5);

        // Both score 2.0; the tie keeps tracked order.
        let names: Vec<_> = report.proximity.iter().map(|r| r.token.as_str()).collect();
        check!(names == ["frodo", "sam"]);
        check!(report.words_with_exact_count.len() == 3);
    }

    #[tokio::test]
    async fn test_empty_tokens_shift_positions_only() {
        // sam=1 ""=2 ""=3 x=4 ring=5; filtered, ring would sit at 3, inside window 2
        let corpus: Arc<[Token]> = split_corpus_raw("Sam.  x ring").into();
        let config = Config {
            window: 2,
            ..config(&["sam"])
        };

        let report = analyze(&config, Vec::new(), corpus).await.unwrap();
        check!(report.total_words == 3);
        check!(report.unique_words == 3);
        check!(report.lookups.iter().all(|timing| timing.missing == 3));
        check!(report.proximity[0].proximity_count == 0);
    }

    #[tokio::test]
    async fn test_analyze_empty_inputs() {
        let report = analyze(&Config::default(), Vec::new(), Vec::<Token>::new().into())
            .await
            .unwrap();

        check!(report.total_words == 0);
        check!(report.unique_words == 0);
        check!(report.dictionary.size == 0);
        check!(report.proximity.is_empty());
        check!(report.closest().is_none());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let config = Config {
            tracked: vec!["ring".to_string()],
            ..Config::default()
        };
        let error = run(&config).await.unwrap_err();
        check!(error.to_string().contains("Invalid configuration"));
    }
}
