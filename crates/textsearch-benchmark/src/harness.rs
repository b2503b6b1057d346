//! Trial harness: owns corpora, patterns, and the algorithm set.

use textsearch_core::SubstringSearch;
use tracing::{info, warn};

use crate::config::BenchmarkConfig;
use crate::result::BenchmarkResults;
use crate::runner::BenchmarkRunner;

/// A named text corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    name: String,
    text: Vec<u8>,
}

impl Corpus {
    /// Creates a corpus from a name and its raw bytes.
    pub fn new(name: impl Into<String>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Corpus identifier used in records and reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The corpus bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

/// Owns the (corpus, pattern) pairs and algorithm variants and executes
/// every combination sequentially in a deterministic order: corpus-major,
/// then pattern, then algorithm.
///
/// A trial that fails its precondition check is logged and skipped; it
/// neither corrupts nor blocks the trials that follow.
///
/// # Example
///
/// ```
/// use textsearch_algos::all_algorithms;
/// use textsearch_benchmark::{BenchmarkConfig, Corpus, Harness};
///
/// let harness = Harness::new(BenchmarkConfig::new("Demo"), all_algorithms())
///     .with_corpus(Corpus::new("greeting", b"hello world".to_vec()))
///     .with_pattern("world");
/// let results = harness.run();
/// assert_eq!(results.record_count(), 3);
/// ```
pub struct Harness {
    runner: BenchmarkRunner,
    algorithms: Vec<Box<dyn SubstringSearch>>,
    corpora: Vec<Corpus>,
    patterns: Vec<String>,
}

impl Harness {
    /// Creates a harness over the given algorithm set.
    pub fn new(config: BenchmarkConfig, algorithms: Vec<Box<dyn SubstringSearch>>) -> Self {
        Self {
            runner: BenchmarkRunner::new(config),
            algorithms,
            corpora: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Adds a corpus.
    pub fn with_corpus(mut self, corpus: Corpus) -> Self {
        self.corpora.push(corpus);
        self
    }

    /// Adds a pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Runs every (corpus, pattern, algorithm) trial and collects the
    /// records.
    pub fn run(&self) -> BenchmarkResults {
        let mut results = BenchmarkResults::new(self.runner.config().name());
        for corpus in &self.corpora {
            info!(corpus = corpus.name(), bytes = corpus.text().len(), "benchmarking corpus");
            for pattern in &self.patterns {
                for algorithm in &self.algorithms {
                    match self
                        .runner
                        .run(algorithm.as_ref(), corpus.name(), corpus.text(), pattern)
                    {
                        Ok(record) => results.add_record(record),
                        Err(e) => warn!(
                            algorithm = algorithm.name(),
                            corpus = corpus.name(),
                            pattern,
                            error = %e,
                            "trial skipped"
                        ),
                    }
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use textsearch_algos::all_algorithms;

    use super::*;

    fn demo_harness(patterns: &[&str]) -> Harness {
        let mut harness = Harness::new(BenchmarkConfig::new("test"), all_algorithms())
            .with_corpus(Corpus::new("first", b"the quick brown fox".to_vec()))
            .with_corpus(Corpus::new("second", b"mississippi".to_vec()));
        for p in patterns {
            harness = harness.with_pattern(*p);
        }
        harness
    }

    #[test]
    fn runs_every_combination_in_corpus_major_order() {
        let results = demo_harness(&["quick", "issi"]).run();
        // 2 corpora x 2 patterns x 3 algorithms
        assert_eq!(results.record_count(), 12);
        let corpora: Vec<_> = results.records.iter().map(|r| r.corpus.as_str()).collect();
        assert!(corpora[..6].iter().all(|&c| c == "first"));
        assert!(corpora[6..].iter().all(|&c| c == "second"));
        // Within a corpus, trials are pattern-major.
        let patterns: Vec<_> = results.records[..6]
            .iter()
            .map(|r| r.pattern.as_str())
            .collect();
        assert!(patterns[..3].iter().all(|&p| p == "quick"));
        assert!(patterns[3..].iter().all(|&p| p == "issi"));
    }

    #[test]
    fn all_algorithms_agree_within_each_trial_group() {
        let results = demo_harness(&["issi", "absent"]).run();
        for corpus in results.corpora() {
            for pattern in ["issi", "absent"] {
                let indices: Vec<_> = results
                    .for_corpus(corpus)
                    .filter(|r| r.pattern == pattern)
                    .map(|r| r.match_index)
                    .collect();
                assert_eq!(indices.len(), 3);
                assert!(indices.windows(2).all(|w| w[0] == w[1]));
            }
        }
    }

    #[test]
    fn failed_trial_does_not_block_later_trials() {
        let results = demo_harness(&["", "fox"]).run();
        // Empty-pattern trials are skipped, the rest still run.
        assert_eq!(results.record_count(), 6);
        assert!(results.records.iter().all(|r| r.pattern == "fox"));
    }
}
