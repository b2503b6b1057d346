//! textsearch-algos - Classical exact-match substring-search algorithms
//!
//! Three implementations of [`SubstringSearch`], each building its
//! auxiliary table before scanning:
//! - [`KnuthMorrisPratt`] with a [`PrefixTable`] (failure function)
//! - [`BoyerMoore`] with a [`LastOccurrenceTable`] (bad-character rule)
//! - [`RabinKarp`] with a [`RollingHash`] window
//!
//! All three agree on the leftmost match index for any input; they differ
//! only in how many loop steps they spend finding it, which is what the
//! benchmark harness measures.
//!
//! [`SubstringSearch`]: textsearch_core::SubstringSearch

pub mod boyer_moore;
pub mod kmp;
pub mod last_occurrence;
pub mod prefix;
pub mod rabin_karp;
pub mod rolling_hash;

pub use boyer_moore::BoyerMoore;
pub use kmp::KnuthMorrisPratt;
pub use last_occurrence::LastOccurrenceTable;
pub use prefix::PrefixTable;
pub use rabin_karp::RabinKarp;
pub use rolling_hash::RollingHash;

use textsearch_core::SubstringSearch;

/// All algorithm variants, in the order reports list them.
pub fn all_algorithms() -> Vec<Box<dyn SubstringSearch>> {
    vec![
        Box::new(BoyerMoore),
        Box::new(KnuthMorrisPratt),
        Box::new(RabinKarp),
    ]
}
