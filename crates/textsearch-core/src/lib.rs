//! textsearch-core - Core types and traits for substring-search benchmarking
//!
//! This crate provides the shared vocabulary of the textsearch workspace:
//! - [`SearchResult`] pairing an iteration count with a match index
//! - [`SubstringSearch`], the capability trait algorithm variants implement
//! - [`SearchError`], the pre-scan validation error taxonomy
//!
//! No I/O and no timing live here; those belong to the benchmark and CLI
//! crates.

pub mod error;
pub mod result;
pub mod search;

pub use error::{Result, SearchError};
pub use result::SearchResult;
pub use search::SubstringSearch;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_result_reports_match() {
        let r = SearchResult::found(5, 0);
        assert!(r.is_match());
        assert_eq!(r.iterations, 5);
        assert_eq!(r.match_index, Some(0));
    }

    #[test]
    fn not_found_result_has_no_index() {
        let r = SearchResult::not_found(0);
        assert!(!r.is_match());
        assert_eq!(r.match_index, None);
    }

    #[test]
    fn empty_pattern_error_formats_message() {
        let e = SearchError::EmptyPattern;
        assert_eq!(e.to_string(), "pattern must not be empty");
    }
}
