//! textsearch - benchmark classical substring-search algorithms.
//!
//! Loads text corpora from disk, runs every (corpus, pattern, algorithm)
//! trial through the benchmark harness, prints a colored comparison
//! table, and optionally writes Markdown/CSV/JSON reports.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textsearch_algos::all_algorithms;
use textsearch_benchmark::{
    BenchmarkConfig, BenchmarkResults, Corpus, CsvExporter, Harness, MarkdownReport,
};

/// Benchmark Boyer-Moore, Knuth-Morris-Pratt, and Rabin-Karp substring
/// search against text corpora.
#[derive(Debug, Parser)]
#[command(name = "textsearch", version, about)]
struct Args {
    /// Corpus file to search in (repeatable).
    #[arg(long = "corpus", required = true)]
    corpora: Vec<PathBuf>,

    /// Pattern to search for (repeatable).
    #[arg(long = "pattern", required = true)]
    patterns: Vec<String>,

    /// Unmeasured warmup invocations per trial.
    #[arg(long, default_value_t = 0)]
    warmup: usize,

    /// Measured runs per trial; the minimum elapsed time is recorded.
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Write a Markdown report to this path.
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Write a CSV export to this path.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON export to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

/// CLI-level failures: everything the search core never sees.
#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read corpus {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default directives when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVES: &str =
    "textsearch_cli=info,textsearch_benchmark=info,textsearch_algos=info";

/// Builds the log filter: the `RUST_LOG` value wins outright when set,
/// so every crate target stays overridable (including silencing them).
fn build_filter(env: Option<&str>) -> EnvFilter {
    match env {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(DEFAULT_LOG_DIRECTIVES),
    }
}

fn init_tracing() {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Reads a corpus file, naming it after its file stem.
fn load_corpus(path: &Path) -> Result<Corpus, CliError> {
    let text = fs::read(path).map_err(|source| CliError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Corpus::new(name, text))
}

fn print_results(results: &BenchmarkResults) {
    for corpus in results.corpora() {
        println!("\n{} {}", "Corpus:".bold(), corpus.cyan().bold());
        println!(
            "  {:<20} {:<24} {:>10} {:>10} {:>12}",
            "Algorithm".bold(),
            "Pattern".bold(),
            "Iterations".bold(),
            "Index".bold(),
            "Time (ms)".bold(),
        );
        for record in results.for_corpus(corpus) {
            let fastest = results
                .fastest(corpus, &record.pattern)
                .is_some_and(|f| f.algorithm == record.algorithm);
            let index = match record.match_index {
                Some(i) => i.to_string(),
                None => "not found".to_string(),
            };
            let time = format!("{:.4}", record.elapsed.as_secs_f64() * 1000.0);
            let line = format!(
                "  {:<20} {:<24} {:>10} {:>10} {:>12}",
                record.algorithm,
                truncate(&record.pattern, 24),
                record.iterations,
                index,
                time,
            );
            if fastest {
                println!("{}", line.green());
            } else {
                println!("{line}");
            }
        }
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = BenchmarkConfig::new("Substring Search")
        .with_warmup_count(args.warmup)
        .with_run_count(args.runs);

    let mut harness = Harness::new(config, all_algorithms());
    for path in &args.corpora {
        harness = harness.with_corpus(load_corpus(path)?);
    }
    for pattern in &args.patterns {
        harness = harness.with_pattern(pattern.clone());
    }

    let results = harness.run();
    info!(
        trials = results.record_count(),
        corpora = args.corpora.len(),
        patterns = args.patterns.len(),
        "benchmark complete"
    );
    print_results(&results);

    if let Some(path) = &args.markdown {
        MarkdownReport::to_file(&results, path).map_err(|source| CliError::ReportWrite {
            path: path.clone(),
            source,
        })?;
    }
    if let Some(path) = &args.csv {
        CsvExporter::to_file(&results, path).map_err(|source| CliError::ReportWrite {
            path: path.clone(),
            source,
        })?;
    }
    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&results)?;
        fs::write(path, json).map_err(|source| CliError::ReportWrite {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
