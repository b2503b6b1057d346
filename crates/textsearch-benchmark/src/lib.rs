//! Benchmarking harness for the textsearch algorithms.
//!
//! This crate measures the three substring-search variants against
//! arbitrary corpora and patterns, collecting iteration counts, match
//! indices, and wall-clock durations, and renders the results as
//! Markdown or CSV.
//!
//! # Overview
//!
//! - [`BenchmarkConfig`] — warmup/run counts and report output paths
//! - [`BenchmarkRunner`] — times one search invocation with a monotonic
//!   clock
//! - [`Harness`] — owns corpora, patterns, and the algorithm set; runs
//!   every combination sequentially in a deterministic order
//! - [`BenchmarkRecord`] / [`BenchmarkResults`] — immutable trial
//!   records plus aggregate queries
//! - [`MarkdownReport`] / [`CsvExporter`] — report rendering
//!
//! # Example
//!
//! ```
//! use textsearch_algos::all_algorithms;
//! use textsearch_benchmark::{BenchmarkConfig, Corpus, Harness, MarkdownReport};
//!
//! let harness = Harness::new(BenchmarkConfig::new("Demo"), all_algorithms())
//!     .with_corpus(Corpus::new("sample", b"the quick brown fox".to_vec()))
//!     .with_pattern("brown")
//!     .with_pattern("wolf");
//! let results = harness.run();
//! assert_eq!(results.record_count(), 6);
//!
//! let report = MarkdownReport::to_string(&results);
//! assert!(report.contains("## Corpus: sample"));
//! ```

mod config;
mod harness;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use harness::{Corpus, Harness};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkRecord, BenchmarkResults};
pub use runner::BenchmarkRunner;
