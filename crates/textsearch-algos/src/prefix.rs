//! KMP prefix function (failure table).

use tracing::trace;

/// Prefix-function table for a pattern.
///
/// `lps[i]` is the length of the longest proper prefix of
/// `pattern[0..=i]` that is also a suffix of it. The scan phase uses the
/// table to fall back after a mismatch without re-reading text bytes.
///
/// Invariants: `lps[0] == 0` and `lps[i] <= i` for all `i`.
///
/// # Example
///
/// ```
/// use textsearch_algos::PrefixTable;
///
/// let table = PrefixTable::new(b"abcabd");
/// assert_eq!(table.as_slice(), &[0, 0, 0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTable {
    lps: Vec<usize>,
}

impl PrefixTable {
    /// Builds the table in O(m) with the two-pointer construction:
    /// extend the current match length on success, fall back via
    /// `lps[length - 1]` on mismatch, reset to zero when no shorter
    /// border remains.
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0usize; m];
        let mut length = 0;
        let mut i = 1;
        while i < m {
            if pattern[i] == pattern[length] {
                length += 1;
                lps[i] = length;
                i += 1;
            } else if length != 0 {
                length = lps[length - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }
        trace!(pattern_len = m, table = ?lps, "prefix table built");
        Self { lps }
    }

    /// Next pattern cursor after a mismatch with the cursor at `j`.
    ///
    /// Requires `1 <= j < m`; callers handle `j == 0` by advancing the
    /// text cursor instead.
    pub fn fallback(&self, j: usize) -> usize {
        self.lps[j - 1]
    }

    /// Returns the raw table.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}
