//! Benchmark record and aggregate result types.

use std::time::Duration;

use serde::Serialize;
use textsearch_core::SearchResult;

/// Result of one (algorithm, corpus, pattern) trial.
///
/// Immutable after creation; owned by the reporting side.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    /// Corpus identifier (file stem or caller-supplied name).
    pub corpus: String,
    /// Pattern that was searched for.
    pub pattern: String,
    /// Algorithm name as reported by the variant.
    pub algorithm: String,
    /// Core loop steps executed.
    pub iterations: u64,
    /// Starting index of the leftmost match, if any.
    pub match_index: Option<usize>,
    /// Measured wall-clock duration of the search.
    #[serde(with = "duration_nanos")]
    pub elapsed: Duration,
}

impl BenchmarkRecord {
    /// Creates a record from a search result and its measured duration.
    pub fn new(
        corpus: impl Into<String>,
        pattern: impl Into<String>,
        algorithm: impl Into<String>,
        result: SearchResult,
        elapsed: Duration,
    ) -> Self {
        Self {
            corpus: corpus.into(),
            pattern: pattern.into(),
            algorithm: algorithm.into(),
            iterations: result.iterations,
            match_index: result.match_index,
            elapsed,
        }
    }
}

/// Serializes a `Duration` as integer nanoseconds.
mod duration_nanos {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u128(d.as_nanos())
    }
}

/// Ordered collection of trial records with aggregate queries.
///
/// Records keep the order trials were executed in, which is
/// deterministic: corpus-major, then pattern, then algorithm.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use textsearch_benchmark::{BenchmarkRecord, BenchmarkResults};
/// use textsearch_core::SearchResult;
///
/// let mut results = BenchmarkResults::new("Demo");
/// results.add_record(BenchmarkRecord::new(
///     "article1",
///     "needle",
///     "Boyer-Moore",
///     SearchResult::found(4, 17),
///     Duration::from_micros(12),
/// ));
/// assert_eq!(results.record_count(), 1);
/// assert_eq!(results.corpora(), vec!["article1"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResults {
    /// Benchmark name.
    pub name: String,
    /// Trial records in execution order.
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkResults {
    /// Creates an empty result set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Appends a trial record.
    pub fn add_record(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Returns the number of recorded trials.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct corpus names, in first-seen order.
    pub fn corpora(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.corpus.as_str()) {
                seen.push(record.corpus.as_str());
            }
        }
        seen
    }

    /// Records belonging to one corpus, in execution order.
    pub fn for_corpus<'a>(&'a self, corpus: &'a str) -> impl Iterator<Item = &'a BenchmarkRecord> {
        self.records.iter().filter(move |r| r.corpus == corpus)
    }

    /// The fastest record for a (corpus, pattern) pair, if any trial ran.
    pub fn fastest(&self, corpus: &str, pattern: &str) -> Option<&BenchmarkRecord> {
        self.records
            .iter()
            .filter(|r| r.corpus == corpus && r.pattern == pattern)
            .min_by_key(|r| r.elapsed)
    }
}
