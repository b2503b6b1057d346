//! Benchmark configuration.

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, and optional report
/// output paths.
///
/// # Example
///
/// ```
/// use textsearch_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("Substring Search")
///     .with_warmup_count(2)
///     .with_run_count(5);
///
/// assert_eq!(config.name(), "Substring Search");
/// assert_eq!(config.warmup_count(), 2);
/// assert_eq!(config.run_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    markdown_output_path: Option<String>,
    csv_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - run_count: 1 (one measured invocation per trial)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            run_count: 1,
            markdown_output_path: None,
            csv_output_path: None,
        }
    }

    /// Sets the number of warmup invocations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs per trial.
    ///
    /// Searches are deterministic, so extra runs only reduce timing
    /// noise; the recorded elapsed time is the minimum across runs.
    /// A count of zero is treated as one.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count.max(1);
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of warmup invocations.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of measurement runs per trial.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
