//! Polynomial rolling hash for Rabin-Karp.

use tracing::trace;

/// Radix of the polynomial hash (full byte range).
pub const RADIX: i64 = 256;

/// Small prime modulus. Fixed rather than configurable: hash equality is
/// only a filter, every hit is verified by direct byte comparison.
pub const MODULUS: i64 = 101;

/// Hash of a fixed-width byte window, updated in O(1) per shift.
///
/// The window hash is advanced by removing the leading byte's
/// contribution (weighted by `RADIX^(m-1) mod MODULUS`) and appending the
/// trailing byte. The stored value is always in `0..MODULUS`.
///
/// # Example
///
/// ```
/// use textsearch_algos::RollingHash;
///
/// let mut window = RollingHash::new(b"abc");
/// window.roll(b'a', b'd');
/// assert_eq!(window.value(), RollingHash::new(b"bcd").value());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollingHash {
    value: i64,
    /// `RADIX^(m-1) mod MODULUS`, the weight of the window's leading byte.
    lead_weight: i64,
}

impl RollingHash {
    /// Hashes an initial window in O(m). The window must not be empty.
    pub fn new(window: &[u8]) -> Self {
        debug_assert!(!window.is_empty());
        let mut lead_weight = 1;
        for _ in 1..window.len() {
            lead_weight = (lead_weight * RADIX) % MODULUS;
        }
        let mut value = 0;
        for &b in window {
            value = (RADIX * value + i64::from(b)) % MODULUS;
        }
        trace!(window_len = window.len(), value, lead_weight, "window hashed");
        Self { value, lead_weight }
    }

    /// Current hash value, in `0..MODULUS`.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Slides the window one position: drops `outgoing` from the front
    /// and appends `incoming`. A negative intermediate result is
    /// corrected by adding the modulus back.
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        self.value = (RADIX * (self.value - i64::from(outgoing) * self.lead_weight)
            + i64::from(incoming))
            % MODULUS;
        if self.value < 0 {
            self.value += MODULUS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolled_hash_matches_fresh_hash() {
        let text = b"the quick brown fox";
        let m = 5;
        let mut window = RollingHash::new(&text[..m]);
        for i in 0..text.len() - m {
            window.roll(text[i], text[i + m]);
            assert_eq!(window.value(), RollingHash::new(&text[i + 1..i + 1 + m]).value());
        }
    }

    #[test]
    fn hash_stays_non_negative() {
        let text = b"\xff\x00\xfe\x01\xfd\x02\xfc";
        let m = 3;
        let mut window = RollingHash::new(&text[..m]);
        assert!(window.value() >= 0);
        for i in 0..text.len() - m {
            window.roll(text[i], text[i + m]);
            assert!(window.value() >= 0);
            assert!(window.value() < MODULUS);
        }
    }

    #[test]
    fn single_byte_window() {
        let h = RollingHash::new(b"a");
        assert_eq!(h.value(), i64::from(b'a') % MODULUS);
    }
}
