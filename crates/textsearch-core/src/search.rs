//! The substring-search capability trait.

use crate::error::Result;
use crate::result::SearchResult;

/// Exact-match substring search over byte slices.
///
/// Implementations scan `text` left to right and report the starting
/// index of the leftmost occurrence of `pattern`, together with the
/// number of core loop steps taken. The trait is object-safe so a fixed
/// set of algorithm variants can be benchmarked uniformly.
///
/// # Contract
///
/// * An empty pattern is rejected with [`SearchError::EmptyPattern`]
///   before any scanning.
/// * A pattern longer than the text answers "not found" with minimal
///   iteration cost and never reads out of bounds.
/// * Text and pattern are borrowed read-only; a search never mutates or
///   retains them.
///
/// [`SearchError::EmptyPattern`]: crate::SearchError::EmptyPattern
pub trait SubstringSearch {
    /// Human-readable algorithm name, used in benchmark records and
    /// reports.
    fn name(&self) -> &'static str;

    /// Searches for the leftmost occurrence of `pattern` in `text`.
    fn search(&self, text: &[u8], pattern: &[u8]) -> Result<SearchResult>;
}
