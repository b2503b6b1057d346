//! Cross-algorithm consistency: all three variants must agree on the
//! leftmost match index (or on "not found") for the same input. This is
//! the primary correctness oracle.

use textsearch_algos::all_algorithms;
use textsearch_core::SearchError;

/// Reference answer: leftmost occurrence by naive scan.
fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    (0..=text.len() - pattern.len()).find(|&i| &text[i..i + pattern.len()] == pattern)
}

fn assert_all_agree(text: &[u8], pattern: &[u8]) {
    let expected = naive_find(text, pattern);
    for algo in all_algorithms() {
        let result = algo
            .search(text, pattern)
            .unwrap_or_else(|e| panic!("{} failed: {e}", algo.name()));
        assert_eq!(
            result.match_index,
            expected,
            "{} disagrees with naive scan for text {:?} pattern {:?}",
            algo.name(),
            String::from_utf8_lossy(text),
            String::from_utf8_lossy(pattern),
        );
    }
}

#[test]
fn agreement_on_reference_scenarios() {
    assert_all_agree(b"abcabcabd", b"abcabd"); // index 3
    assert_all_agree(b"aaaaaaaaab", b"aaab"); // index 6
    assert_all_agree(b"hello world", b"xyz"); // not found
    assert_all_agree(b"", b"a"); // pattern longer than text
    assert_all_agree(b"mississippi", b"issi"); // index 1
}

#[test]
fn agreement_on_boundary_positions() {
    assert_all_agree(b"pattern at start", b"pattern");
    assert_all_agree(b"ends with pattern", b"pattern");
    assert_all_agree(b"x", b"x");
    assert_all_agree(b"exact", b"exact");
}

#[test]
fn agreement_on_repetitive_inputs() {
    assert_all_agree(b"aaaaaaaaaaaaaaaaaaaa", b"aaab");
    assert_all_agree(b"abababababababab", b"abba");
    assert_all_agree(b"abababababababab", b"baba");
    assert_all_agree(b"aabaabaaabaaab", b"aaab");
}

#[test]
fn agreement_on_non_ascii_bytes() {
    let text = "шукаємо підрядок у тексті".as_bytes();
    assert_all_agree(text, "підрядок".as_bytes());
    assert_all_agree(text, "відсутній".as_bytes());
    assert_all_agree(&[0u8, 255, 1, 254, 2, 253], &[1, 254]);
}

#[test]
fn agreement_over_sliding_patterns() {
    let text = b"the quick brown fox jumps over the lazy dog";
    for width in 1..=6 {
        for start in 0..=text.len() - width {
            assert_all_agree(text, &text[start..start + width]);
        }
    }
}

#[test]
fn all_reject_empty_pattern() {
    for algo in all_algorithms() {
        assert_eq!(
            algo.search(b"some text", b"").unwrap_err(),
            SearchError::EmptyPattern,
            "{} accepted an empty pattern",
            algo.name()
        );
    }
}

#[test]
fn iterations_monotonic_in_text_length() {
    // With no early match, a longer text cannot take fewer iterations.
    let pattern = b"qx";
    for algo in all_algorithms() {
        let mut previous = 0u64;
        for len in [8usize, 64, 512] {
            let text = vec![b'a'; len];
            let result = algo.search(&text, pattern).unwrap();
            assert_eq!(result.match_index, None);
            assert!(
                result.iterations >= previous,
                "{} iterations decreased for longer text",
                algo.name()
            );
            previous = result.iterations;
        }
    }
}
