use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Symbols a [`Sequence`] may contain. `N` marks an unknown base.
pub const ALPHABET: &[u8; 5] = b"ACGTN";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Check whether a byte is one of the (uppercase) nucleotide symbols
#[must_use]
pub fn is_valid_symbol(symbol: u8) -> bool {
    ALPHABET.contains(&symbol)
}

/// Complement of a single base. Bytes outside the alphabet map to themselves.
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a byte sequence (A<->T, C<->G, N<->N, reversed).
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// An immutable nucleotide sequence over `{A, C, G, T, N}`.
///
/// Storage is shared, so cloning is cheap; equality and hashing are by
/// content. Dereferences to `[u8]`, which is what every matching and
/// assembly routine consumes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Arc<[u8]>);

impl Sequence {
    /// Build a sequence from raw bytes, uppercasing and validating each symbol.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidSymbol` for the first byte that is not
    /// one of `ACGTN` (case-insensitive).
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, SequenceError> {
        let bytes = bytes.as_ref();
        let mut symbols = Vec::with_capacity(bytes.len());
        for (position, &b) in bytes.iter().enumerate() {
            let symbol = b.to_ascii_uppercase();
            if !is_valid_symbol(symbol) {
                return Err(SequenceError::InvalidSymbol {
                    symbol: char::from(b),
                    position,
                });
            }
            symbols.push(symbol);
        }
        Ok(Self(symbols.into()))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self(reverse_complement(&self.0).into())
    }

    /// Concatenate `self` with `other[skip..]`.
    ///
    /// This is the merge step of overlap assembly: `skip` is the overlap length.
    #[must_use]
    pub fn merge(&self, other: &Sequence, skip: usize) -> Self {
        let tail = other.0.get(skip..).unwrap_or_default();
        let mut merged = Vec::with_capacity(self.0.len() + tail.len());
        merged.extend_from_slice(&self.0);
        merged.extend_from_slice(tail);
        Self(merged.into())
    }

    /// Concatenate a list of sequences in order
    #[must_use]
    pub fn concat(parts: &[Sequence]) -> Self {
        let total = parts.iter().map(|p| p.len()).sum();
        let mut joined = Vec::with_capacity(total);
        for part in parts {
            joined.extend_from_slice(part);
        }
        Self(joined.into())
    }

    /// Count occurrences of each symbol, in `ALPHABET` order
    #[must_use]
    pub fn base_counts(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for &b in self.0.iter() {
            if let Some(idx) = ALPHABET.iter().position(|&s| s == b) {
                counts[idx] += 1;
            }
        }
        counts
    }
}

impl Deref for Sequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::str::FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated on construction, so always ASCII
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({self})")
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Sequence::new(s).map_err(serde::de::Error::custom)
    }
}
