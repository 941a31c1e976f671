//! # seqscan
//!
//! A library for approximate substring search and read assembly over
//! nucleotide sequences (`A`, `C`, `G`, `T`, `N`).
//!
//! Two problems are covered: finding where a short pattern occurs in a long
//! reference while tolerating a bounded number of differences, and
//! reconstructing a long sequence from short reads that overlap.
//!
//! ## Features
//!
//! - **Exact search**: naive scan (optionally with the reverse complement) and
//!   Boyer-Moore with bad-character and good-suffix rules
//! - **Work accounting**: every search reports alignments tried and character
//!   comparisons, so algorithms can be compared on the same input
//! - **Edit distance**: global and end-free dynamic programming
//! - **Indexed mismatch search**: pigeonhole filtering over a k-mer index or a
//!   strided subsequence index, verified against the text
//! - **Assembly**: suffix/prefix overlaps, greedy and exact shortest common
//!   superstrings
//!
//! ## Example
//!
//! ```rust
//! use seqscan::index::KmerIndex;
//! use seqscan::matching::{naive_mismatch_match, PigeonholeMatcher};
//!
//! let text = b"GGCGCGGTGGCTCACGCCTGTAATGGCGCGGTGGCTAACGCCTGTAATCCCAGCACTTTGG";
//! let pattern = b"GGCGCGGTGGCTCACGCCTGTAAT";
//!
//! let index = KmerIndex::new(text, 8).unwrap();
//! let hits = PigeonholeMatcher::new(&index, 2).find_all(pattern).unwrap();
//!
//! assert_eq!(hits.occurrences, vec![0, 24]);
//! assert_eq!(hits.occurrences, naive_mismatch_match(pattern, text, 2).occurrences);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: sequences, search results and errors
//! - [`matching`]: exact, DP and pigeonhole matchers, and the search engine
//! - [`index`]: k-mer and subsequence indexes
//! - [`assembly`]: overlaps, greedy and exact assembly
//! - [`parsing`]: FASTA, FASTQ and base quality readers
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::{Assembly, AssemblyConfig, GreedyAssembler};
pub use core::sequence::{Sequence, SequenceError};
pub use core::types::*;
pub use matching::engine::{SearchAlgorithm, SearchConfig, SearchEngine};
