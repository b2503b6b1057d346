//! Search result types.

/// Outcome of a single search invocation.
///
/// Pairs the number of core loop steps the algorithm executed with the
/// starting position of the leftmost match, if any. Iteration counts are
/// part of the measurement contract: each algorithm defines exactly what
/// one iteration means (KMP: one outer-loop step, Boyer-Moore: one
/// alignment attempt, Rabin-Karp: one window position plus one for setup).
///
/// # Example
///
/// ```
/// use textsearch_core::SearchResult;
///
/// let found = SearchResult::found(12, 3);
/// assert_eq!(found.match_index, Some(3));
/// assert!(found.is_match());
///
/// let missed = SearchResult::not_found(40);
/// assert_eq!(missed.match_index, None);
/// assert!(!missed.is_match());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of core loop steps executed.
    pub iterations: u64,
    /// Starting index of the leftmost occurrence, or `None` if the
    /// pattern does not occur.
    pub match_index: Option<usize>,
}

impl SearchResult {
    /// Creates a result for a successful match.
    pub fn found(iterations: u64, index: usize) -> Self {
        Self {
            iterations,
            match_index: Some(index),
        }
    }

    /// Creates a result for an unsuccessful search.
    pub fn not_found(iterations: u64) -> Self {
        Self {
            iterations,
            match_index: None,
        }
    }

    /// Returns true if the pattern was found.
    pub fn is_match(&self) -> bool {
        self.match_index.is_some()
    }
}
