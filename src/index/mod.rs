//! Sorted substring indexes over a text.
//!
//! Two index flavours share one capability, [`SubstringIndex`]:
//!
//! - [`KmerIndex`]: keys are contiguous substrings of length `k`
//! - [`SubsequenceIndex`]: keys take `k` symbols spaced `ival` apart, spanning
//!   `1 + ival * (k - 1)` text positions
//!
//! Both are a list of text offsets sorted by `(key, offset)`. A query extracts
//! the key at offset 0 of the pattern, binary searches to the first entry
//! with that key and returns the run of equal keys. Keys are never copied out
//! of the text; the index borrows the text it was built over.
//!
//! ## Example
//!
//! ```rust
//! use seqscan::index::{KmerIndex, SubstringIndex};
//!
//! let text = b"GCTACGATCTAGAATCTA";
//! let index = KmerIndex::new(text, 3).unwrap();
//! assert_eq!(index.query(b"TCTA"), vec![7, 14]);
//! ```

pub mod kmer;
pub mod subsequence;

pub use kmer::KmerIndex;
pub use subsequence::SubsequenceIndex;

use std::cmp::Ordering;

use crate::core::types::MatchError;

/// Query capability shared by the k-mer and subsequence indexes
pub trait SubstringIndex {
    /// The text the index was built over
    fn text(&self) -> &[u8];

    /// Number of symbols in a key (`k`)
    fn key_len(&self) -> usize;

    /// Distance between consecutive key symbols (1 for contiguous k-mers)
    fn stride(&self) -> usize;

    /// Number of text positions a key covers: `1 + stride * (k - 1)`
    fn span(&self) -> usize;

    /// Number of indexed entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offsets (ascending) whose key equals the key at offset 0 of `pattern`.
    /// Empty when the pattern is shorter than one key span.
    fn query(&self, pattern: &[u8]) -> Vec<usize>;

    /// Pattern offsets of `max_mismatches + 1` pairwise-disjoint keys for
    /// pigeonhole search over a pattern of `pattern_len` symbols.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if the index layout cannot provide
    /// enough disjoint keys for that pattern length.
    fn partition(&self, pattern_len: usize, max_mismatches: usize)
        -> Result<Vec<usize>, MatchError>;
}

/// Offsets of a text sorted by the strided key starting at each offset.
#[derive(Debug, Clone)]
struct SortedKeys<'a> {
    text: &'a [u8],
    k: usize,
    stride: usize,
    span: usize,
    offsets: Vec<usize>,
}

impl<'a> SortedKeys<'a> {
    fn build(text: &'a [u8], k: usize, stride: usize) -> Result<Self, MatchError> {
        if k == 0 {
            return Err(MatchError::InvalidInput(
                "key length must be at least 1".to_string(),
            ));
        }
        if stride == 0 {
            return Err(MatchError::InvalidInput(
                "key stride must be at least 1".to_string(),
            ));
        }

        let span = (k - 1)
            .checked_mul(stride)
            .and_then(|s| s.checked_add(1))
            .ok_or_else(|| {
                MatchError::InvalidInput(format!(
                    "key of {k} symbols with stride {stride} spans more than {} positions",
                    usize::MAX
                ))
            })?;

        let layout = Self {
            text,
            k,
            stride,
            span,
            offsets: Vec::new(),
        };
        let mut offsets: Vec<usize> = if text.len() >= span {
            (0..=text.len() - span).collect()
        } else {
            Vec::new()
        };
        offsets.sort_by(|&a, &b| layout.compare_keys(text, a, text, b).then(a.cmp(&b)));

        Ok(Self { offsets, ..layout })
    }

    fn key_iter<'s>(&self, s: &'s [u8], offset: usize) -> impl Iterator<Item = &'s u8> {
        s[offset..offset + self.span].iter().step_by(self.stride)
    }

    fn compare_keys(&self, a: &[u8], a_offset: usize, b: &[u8], b_offset: usize) -> Ordering {
        self.key_iter(a, a_offset).cmp(self.key_iter(b, b_offset))
    }

    /// The key at `offset` of `s`, or `None` if it would run past the end
    fn key(&self, s: &[u8], offset: usize) -> Option<Vec<u8>> {
        if offset.checked_add(self.span).map_or(true, |end| end > s.len()) {
            return None;
        }
        Some(self.key_iter(s, offset).copied().collect())
    }

    fn query(&self, pattern: &[u8]) -> Vec<usize> {
        if pattern.len() < self.span {
            return Vec::new();
        }

        let first = self
            .offsets
            .partition_point(|&o| self.compare_keys(self.text, o, pattern, 0) == Ordering::Less);

        self.offsets[first..]
            .iter()
            .take_while(|&&o| self.compare_keys(self.text, o, pattern, 0) == Ordering::Equal)
            .copied()
            .collect()
    }
}
