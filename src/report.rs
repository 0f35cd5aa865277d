//! Run results, rendered for the console or serialized as JSON.

use crate::frequency::FrequencyRecord;
use crate::lookup::LookupTiming;
use crate::proximity::ProximityResult;
use crate::set::BucketStats;
use crate::token::Token;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_words: Vec<FrequencyRecord>,
    pub exact_count: usize,
    pub words_with_exact_count: Vec<FrequencyRecord>,
    pub lookups: Vec<LookupTiming>,
    pub dictionary: BucketStats,
    pub anchor: Token,
    pub window: usize,
    pub proximity: Vec<ProximityResult>,
    #[serde(serialize_with = "serialize_nanos")]
    pub proximity_elapsed: Duration,
}

impl Report {
    /// The tracked token with the highest closeness factor, if any occurred.
    pub fn closest(&self) -> Option<&ProximityResult> {
        self.proximity.first()
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words in the corpus: {}", self.total_words)?;
        writeln!(f, "Unique words in the corpus: {}", self.unique_words)?;

        writeln!(f, "\nTop {} frequent words:", self.top_words.len())?;
        for record in &self.top_words {
            writeln!(f, "  {:<16} {}", record.token, record.count)?;
        }

        writeln!(f, "\nWords occurring {} times:", self.exact_count)?;
        if self.words_with_exact_count.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for record in &self.words_with_exact_count {
            writeln!(f, "  {}", record.token)?;
        }

        writeln!(f, "\nWords not in the dictionary:")?;
        for timing in &self.lookups {
            writeln!(
                f,
                "  {:<14}: {}, time: {}ns",
                timing.strategy,
                timing.missing,
                timing.elapsed.as_nanos()
            )?;
        }
        writeln!(
            f,
            "  dictionary set: {} words in {} buckets ({} empty, largest {})",
            self.dictionary.size,
            self.dictionary.bucket_count,
            self.dictionary.empty_buckets,
            self.dictionary.largest_bucket
        )?;

        match self.closest() {
            Some(best) => writeln!(f, "\nClosest to '{}': {}", self.anchor, best.token)?,
            None => writeln!(f, "\nClosest to '{}': no tracked token found", self.anchor)?,
        }
        for result in &self.proximity {
            writeln!(f, "  {}", result)?;
        }
        write!(
            f,
            "\nProximity time (window {}): {}ms",
            self.window,
            self.proximity_elapsed.as_millis()
        )
    }
}

pub(crate) fn serialize_nanos<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}
