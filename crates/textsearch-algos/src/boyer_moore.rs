//! Boyer-Moore search (bad-character rule).

use textsearch_core::{Result, SearchError, SearchResult, SubstringSearch};
use tracing::trace;

use crate::last_occurrence::LastOccurrenceTable;

/// Boyer-Moore with the bad-character heuristic only (no good-suffix
/// rule).
///
/// The pattern's right end is aligned with text position `i`; bytes are
/// compared right to left. On a mismatch at text position `k` the next
/// alignment end is `k` plus the bad-character shift for `text[k]`,
/// clamped so the alignment end strictly advances (see
/// [`LastOccurrenceTable::shift`]). One iteration is counted per
/// alignment attempt, not per byte comparison within it.
///
/// Sublinear on typical inputs, O(n * m) in the worst case.
///
/// # Example
///
/// ```
/// use textsearch_algos::BoyerMoore;
/// use textsearch_core::SubstringSearch;
///
/// let result = BoyerMoore.search(b"aaaaaaaaab", b"aaab").unwrap();
/// assert_eq!(result.match_index, Some(6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMoore;

impl SubstringSearch for BoyerMoore {
    fn name(&self) -> &'static str {
        "Boyer-Moore"
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

        let last = LastOccurrenceTable::new(pattern);
        let mut i = m - 1;
        let mut iterations = 0u64;
        while i < n {
            iterations += 1;
            let mut k = i;
            let mut j = m - 1;
            loop {
                if text[k] == pattern[j] {
                    if j == 0 {
                        trace!(iterations, index = k, "boyer-moore match");
                        return Ok(SearchResult::found(iterations, k));
                    }
                    k -= 1;
                    j -= 1;
                } else {
                    i = k + last.shift(text[k], j, m);
                    break;
                }
            }
        }
        Ok(SearchResult::not_found(iterations))
    }
}
