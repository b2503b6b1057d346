//! Boyer-Moore bad-character (last occurrence) table.

use tracing::trace;

/// Rightmost occurrence index of each byte in a pattern.
///
/// Built by one left-to-right pass so repeated bytes keep their rightmost
/// index. Bytes absent from the pattern shift the alignment by the full
/// pattern length.
///
/// # Example
///
/// ```
/// use textsearch_algos::LastOccurrenceTable;
///
/// let table = LastOccurrenceTable::new(b"abcab");
/// assert_eq!(table.last_index(b'a'), Some(3));
/// assert_eq!(table.last_index(b'b'), Some(4));
/// assert_eq!(table.last_index(b'z'), None);
/// ```
#[derive(Debug, Clone)]
pub struct LastOccurrenceTable {
    last: [Option<usize>; 256],
}

impl LastOccurrenceTable {
    /// Builds the table for `pattern`.
    pub fn new(pattern: &[u8]) -> Self {
        let mut last = [None; 256];
        for (i, &b) in pattern.iter().enumerate() {
            last[b as usize] = Some(i);
        }
        trace!(
            pattern_len = pattern.len(),
            distinct_bytes = last.iter().filter(|e| e.is_some()).count(),
            "last-occurrence table built"
        );
        Self { last }
    }

    /// Rightmost index of `byte` in the pattern, if it occurs.
    pub fn last_index(&self, byte: u8) -> Option<usize> {
        self.last[byte as usize]
    }

    /// Bad-character shift for a mismatch on `byte` with the pattern
    /// cursor at `j`, for a pattern of length `m`.
    ///
    /// `m - last - 1` when the byte occurs left of the cursor, `m` when
    /// it does not occur at all. When its rightmost occurrence is at or
    /// right of the cursor the shift is clamped to `m - j` so the
    /// alignment always advances; the unclamped rule would move it
    /// backward and re-read text the walk has already passed.
    pub fn shift(&self, byte: u8, j: usize, m: usize) -> usize {
        match self.last[byte as usize] {
            Some(last) if last < j => m - last - 1,
            Some(_) => m - j,
            None => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightmost_index_wins() {
        let t = LastOccurrenceTable::new(b"aaab");
        assert_eq!(t.last_index(b'a'), Some(2));
        assert_eq!(t.last_index(b'b'), Some(3));
    }

    #[test]
    fn absent_byte_shifts_full_length() {
        let t = LastOccurrenceTable::new(b"abc");
        assert_eq!(t.shift(b'z', 2, 3), 3);
    }

    #[test]
    fn present_byte_shift() {
        let t = LastOccurrenceTable::new(b"abc");
        assert_eq!(t.shift(b'a', 2, 3), 2);
        assert_eq!(t.shift(b'b', 2, 3), 1);
    }

    #[test]
    fn shift_clamped_when_occurrence_not_left_of_cursor() {
        // 'c' occurs at index 2, cursor at 1: the alignment still moves.
        let t = LastOccurrenceTable::new(b"abc");
        assert_eq!(t.shift(b'c', 1, 3), 2);
    }
}
