//! Knuth-Morris-Pratt search.

use textsearch_core::{Result, SearchError, SearchResult, SubstringSearch};
use tracing::trace;

use crate::prefix::PrefixTable;

/// Knuth-Morris-Pratt: prefix-function automaton, O(n + m).
///
/// Builds a [`PrefixTable`] for the pattern, then scans with a text
/// cursor `i` and pattern cursor `j`. After a mismatch the pattern cursor
/// falls back through the table instead of re-reading text bytes. One
/// iteration is counted per outer-loop step, not per byte comparison.
///
/// # Example
///
/// ```
/// use textsearch_algos::KnuthMorrisPratt;
/// use textsearch_core::SubstringSearch;
///
/// let result = KnuthMorrisPratt.search(b"abcabcabd", b"abcabd").unwrap();
/// assert_eq!(result.match_index, Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthMorrisPratt;

impl SubstringSearch for KnuthMorrisPratt {
    fn name(&self) -> &'static str {
        "Knuth-Morris-Pratt"
    }

    fn search(&self, text: &[u8], pattern: &[u8]) -> Result<SearchResult> {
        let n = text.len();
        let m = pattern.len();
        if m == 0 {
            return Err(SearchError::EmptyPattern);
        }
        if m > n {
            return Ok(SearchResult::not_found(0));
        }

        let lps = PrefixTable::new(pattern);
        let mut i = 0;
        let mut j = 0;
        let mut iterations = 0u64;
        while i < n {
            iterations += 1;
            if pattern[j] == text[i] {
                i += 1;
                j += 1;
            }
            if j == m {
                trace!(iterations, index = i - j, "kmp match");
                return Ok(SearchResult::found(iterations, i - j));
            }
            if i < n && pattern[j] != text[i] {
                if j != 0 {
                    j = lps.fallback(j);
                } else {
                    i += 1;
                }
            }
        }
        Ok(SearchResult::not_found(iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_leftmost_match() {
        let r = KnuthMorrisPratt.search(b"abcabcabd", b"abcabd").unwrap();
        assert_eq!(r.match_index, Some(3));
    }

    #[test]
    fn match_at_start() {
        let r = KnuthMorrisPratt.search(b"mississippi", b"miss").unwrap();
        assert_eq!(r.match_index, Some(0));
    }

    #[test]
    fn overlapping_prefix_match() {
        let r = KnuthMorrisPratt.search(b"mississippi", b"issi").unwrap();
        assert_eq!(r.match_index, Some(1));
    }

    #[test]
    fn no_match() {
        let r = KnuthMorrisPratt.search(b"hello world", b"xyz").unwrap();
        assert_eq!(r.match_index, None);
        assert!(r.iterations > 0);
    }

    #[test]
    fn pattern_longer_than_text() {
        let r = KnuthMorrisPratt.search(b"", b"a").unwrap();
        assert_eq!(r, SearchResult::not_found(0));
    }

    #[test]
    fn empty_pattern_rejected() {
        assert_eq!(
            KnuthMorrisPratt.search(b"abc", b""),
            Err(SearchError::EmptyPattern)
        );
    }

    #[test]
    fn iterations_grow_with_text_length() {
        let short = KnuthMorrisPratt.search(b"bbbbb", b"abc").unwrap();
        let long = KnuthMorrisPratt.search(b"bbbbbbbbbb", b"abc").unwrap();
        assert!(long.iterations >= short.iterations);
    }
}
