//! Rabin-Karp search.

use textsearch_core::{Result, SearchError, SearchResult, SubstringSearch};
use tracing::trace;

use crate::rolling_hash::RollingHash;

/// Rabin-Karp: rolling polynomial hash with collision verification.
///
/// Hashes the pattern and the first text window in O(m), then slides the
/// window across all `n - m + 1` positions in O(1) per shift. Hash
/// equality is necessary but not sufficient, so every hash hit is
/// verified by direct byte comparison before reporting a match (spurious
/// hits are counted like any other position). One iteration is counted
/// per window position, plus one for the setup pass.
///
/// # Example
///
/// ```
/// use textsearch_algos::RabinKarp;
/// use textsearch_core::SubstringSearch;
///
/// let result = RabinKarp.search(b"mississippi", b"issi").unwrap();
/// assert_eq!(result.match_index, Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarp;

impl SubstringSearch for RabinKarp {
    fn name(&self) -> &'static str {
        "Rabin-Karp"
    }

    fn search(&self, text: &[u8], pattern: &[u8]) -> Result<SearchResult> {
        let n = text.len();
        let m = pattern.len();
        if m == 0 {
            return Err(SearchError::EmptyPattern);
        }
        // Degenerate: the pattern cannot fit. The setup pass still counts.
        if m > n {
            return Ok(SearchResult::not_found(1));
        }

        let pattern_hash = RollingHash::new(pattern);
        let mut window = RollingHash::new(&text[..m]);
        let mut iterations = 1u64;
        for i in 0..=n - m {
            iterations += 1;
            if pattern_hash.value() == window.value() && &text[i..i + m] == pattern {
                trace!(iterations, index = i, "rabin-karp verified match");
                return Ok(SearchResult::found(iterations, i));
            }
            if i < n - m {
                window.roll(text[i], text[i + m]);
            }
        }
        Ok(SearchResult::not_found(iterations))
    }
}
