//! Benchmark runner: times a single algorithm invocation.

use std::time::{Duration, Instant};

use textsearch_core::{Result, SearchResult, SubstringSearch};
use tracing::debug;

use crate::config::BenchmarkConfig;
use crate::result::BenchmarkRecord;

/// Times single search invocations with a monotonic clock.
///
/// The runner executes the configured warmup invocations (unmeasured),
/// then the measurement runs. Searches are deterministic, so the search
/// result is taken from the first measured run and the recorded elapsed
/// time is the minimum across runs. The runner never retries and never
/// mutates its inputs; precondition violations (an empty pattern)
/// surface to the caller as [`SearchError`].
///
/// [`SearchError`]: textsearch_core::SearchError
///
/// # Example
///
/// ```
/// use textsearch_algos::KnuthMorrisPratt;
/// use textsearch_benchmark::{BenchmarkConfig, BenchmarkRunner};
///
/// let runner = BenchmarkRunner::new(BenchmarkConfig::default());
/// let record = runner
///     .run(&KnuthMorrisPratt, "demo", b"mississippi", "issi")
///     .unwrap();
/// assert_eq!(record.match_index, Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Returns the runner's configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs one (algorithm, corpus, pattern) trial.
    pub fn run(
        &self,
        algorithm: &dyn SubstringSearch,
        corpus: &str,
        text: &[u8],
        pattern: &str,
    ) -> Result<BenchmarkRecord> {
        let pattern_bytes = pattern.as_bytes();

        for _ in 0..self.config.warmup_count() {
            algorithm.search(text, pattern_bytes)?;
        }

        let mut first_result: Option<SearchResult> = None;
        let mut best_elapsed = Duration::MAX;
        for _ in 0..self.config.run_count() {
            let start = Instant::now();
            let result = algorithm.search(text, pattern_bytes)?;
            let elapsed = start.elapsed();
            best_elapsed = best_elapsed.min(elapsed);
            first_result.get_or_insert(result);
        }

        // run_count() is always >= 1, so both values are set here.
        let result = first_result.unwrap_or(SearchResult::not_found(0));
        debug!(
            algorithm = algorithm.name(),
            corpus,
            pattern,
            iterations = result.iterations,
            index = ?result.match_index,
            elapsed_us = best_elapsed.as_micros() as u64,
            "trial complete"
        );
        Ok(BenchmarkRecord::new(
            corpus,
            pattern,
            algorithm.name(),
            result,
            best_elapsed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use textsearch_algos::{BoyerMoore, RabinKarp};
    use textsearch_core::SearchError;

    use super::*;

    #[test]
    fn records_search_outcome_and_names() {
        let runner = BenchmarkRunner::new(BenchmarkConfig::default());
        let record = runner
            .run(&BoyerMoore, "article1", b"aaaaaaaaab", "aaab")
            .unwrap();
        assert_eq!(record.algorithm, "Boyer-Moore");
        assert_eq!(record.corpus, "article1");
        assert_eq!(record.pattern, "aaab");
        assert_eq!(record.match_index, Some(6));
        assert!(record.iterations > 0);
    }

    #[test]
    fn surfaces_empty_pattern_to_caller() {
        let runner = BenchmarkRunner::new(BenchmarkConfig::default());
        let err = runner.run(&RabinKarp, "c", b"text", "").unwrap_err();
        assert_eq!(err, SearchError::EmptyPattern);
    }

    #[test]
    fn warmup_and_extra_runs_do_not_change_the_result() {
        let config = BenchmarkConfig::new("t").with_warmup_count(2).with_run_count(3);
        let runner = BenchmarkRunner::new(config);
        let record = runner
            .run(&BoyerMoore, "c", b"hello world", "world")
            .unwrap();
        assert_eq!(record.match_index, Some(6));
    }
}
