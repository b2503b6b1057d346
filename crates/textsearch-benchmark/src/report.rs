//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::{BenchmarkRecord, BenchmarkResults};

fn format_index(record: &BenchmarkRecord) -> String {
    match record.match_index {
        Some(i) => i.to_string(),
        None => "not found".to_string(),
    }
}

fn format_millis(record: &BenchmarkRecord) -> String {
    format!("{:.4}", record.elapsed.as_secs_f64() * 1000.0)
}

/// CSV exporter for benchmark results.
///
/// One row per trial with the header
/// `corpus,pattern,algorithm,iterations,match_index,elapsed_ns`.
///
/// # Example
///
/// ```
/// use textsearch_benchmark::{BenchmarkResults, CsvExporter};
///
/// let results = BenchmarkResults::new("Demo");
/// let csv = CsvExporter::to_string(&results);
/// assert!(csv.starts_with("corpus,pattern,algorithm"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark results to a CSV string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "corpus,pattern,algorithm,iterations,match_index,elapsed_ns"
        )
        .unwrap();
        for record in &results.records {
            writeln!(
                output,
                "{},{},{},{},{},{}",
                record.corpus,
                record.pattern,
                record.algorithm,
                record.iterations,
                record
                    .match_index
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "-1".to_string()),
                record.elapsed.as_nanos(),
            )
            .unwrap();
        }
        output
    }

    /// Exports benchmark results to a CSV file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes benchmark results as CSV to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

/// Markdown report generator.
///
/// Renders one comparison table per corpus (Algorithm | Pattern |
/// Iterations | Index | Time) followed by a summary naming the fastest
/// algorithm for each (corpus, pattern) pair.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use textsearch_benchmark::{BenchmarkRecord, BenchmarkResults, MarkdownReport};
/// use textsearch_core::SearchResult;
///
/// let mut results = BenchmarkResults::new("Substring Search");
/// results.add_record(BenchmarkRecord::new(
///     "article1",
///     "needle",
///     "Rabin-Karp",
///     SearchResult::not_found(120),
///     Duration::from_micros(80),
/// ));
/// let md = MarkdownReport::to_string(&results);
/// assert!(md.contains("# Benchmark: Substring Search"));
/// assert!(md.contains("## Corpus: article1"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates the Markdown report string.
    pub fn to_string(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark: {}", results.name).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Trials**: {}", results.record_count()).unwrap();
        writeln!(output).unwrap();

        if results.records.is_empty() {
            writeln!(output, "*No trials completed.*").unwrap();
            return output;
        }

        for corpus in results.corpora() {
            writeln!(output, "## Corpus: {corpus}").unwrap();
            writeln!(output).unwrap();
            writeln!(output, "| Algorithm | Pattern | Iterations | Index | Time (ms) |").unwrap();
            writeln!(output, "|-----------|---------|------------|-------|-----------|").unwrap();
            for record in results.for_corpus(corpus) {
                writeln!(
                    output,
                    "| {} | {} | {} | {} | {} |",
                    record.algorithm,
                    record.pattern,
                    record.iterations,
                    format_index(record),
                    format_millis(record),
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();
        for corpus in results.corpora() {
            let mut patterns = Vec::new();
            for record in results.for_corpus(corpus) {
                if !patterns.contains(&record.pattern.as_str()) {
                    patterns.push(record.pattern.as_str());
                }
            }
            for pattern in patterns {
                if let Some(fastest) = results.fastest(corpus, pattern) {
                    writeln!(
                        output,
                        "- Fastest for `{}` / `{}`: **{}** ({} ms)",
                        corpus,
                        pattern,
                        fastest.algorithm,
                        format_millis(fastest),
                    )
                    .unwrap();
                }
            }
        }

        output
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(results: &BenchmarkResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(results: &BenchmarkResults, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}
