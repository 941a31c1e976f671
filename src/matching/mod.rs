//! Exact and approximate pattern matching.
//!
//! - [`naive`]: character-by-character scans, with reverse complement and
//!   bounded-mismatch variants
//! - [`boyer_moore`]: Boyer-Moore with bad-character and good-suffix rules
//! - [`edit_distance`]: global and end-free dynamic programming
//! - [`pigeonhole`]: index-assisted bounded-mismatch search
//! - [`engine`]: [`SearchEngine`], which runs one configured strategy against
//!   a reference
//!
//! Every exact and mismatch matcher returns a [`crate::core::SearchHits`]:
//! ascending, deduplicated start offsets and the work performed to find them.
//!
//! ## Example
//!
//! ```rust
//! use seqscan::matching::{BoyerMooreMatcher, naive_match};
//!
//! let text = b"there would have been a time for such a word";
//! let naive = naive_match(b"word", text);
//! let bm = BoyerMooreMatcher::new(b"word").find_all(text);
//!
//! assert_eq!(naive.occurrences, vec![40]);
//! assert_eq!(bm.occurrences, naive.occurrences);
//! assert!(bm.counters.alignments_tried < naive.counters.alignments_tried);
//! ```

pub mod boyer_moore;
pub mod edit_distance;
pub mod engine;
pub mod naive;
pub mod pigeonhole;

pub use boyer_moore::{BoyerMooreMatcher, BoyerMooreTable};
pub use edit_distance::{
    approximate_end_free_match, approximate_match, edit_distance, hamming_distance,
    ApproximateMatch,
};
pub use engine::{SearchAlgorithm, SearchConfig, SearchEngine, SearchReport};
pub use naive::{naive_match, naive_match_with_rc, naive_mismatch_match};
pub use pigeonhole::PigeonholeMatcher;
