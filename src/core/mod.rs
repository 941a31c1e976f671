//! Core data types for sequence search and assembly.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Sequence`]: An immutable, validated nucleotide sequence over `{A, C, G, T, N}`
//! - [`SearchHits`]: An occurrence list together with its [`WorkCounters`]
//! - [`MatchError`]: Errors for invalid or oversized inputs
//!
//! ## Symbols
//!
//! | Symbol | Meaning | Complement |
//! |--------|---------|------------|
//! | A      | adenine | T          |
//! | C      | cytosine| G          |
//! | G      | guanine | C          |
//! | T      | thymine | A          |
//! | N      | unknown | N          |
//!
//! Matching uses **exact symbol equality**: `N` only matches `N`.

pub mod sequence;
pub mod types;

pub use sequence::{reverse_complement, Sequence, SequenceError};
pub use types::{MatchError, SearchHits, WorkCounters};
