use crate::core::types::MatchError;

use super::{SortedKeys, SubstringIndex};

/// Index of every length-`k` substring of a text
#[derive(Debug, Clone)]
pub struct KmerIndex<'a> {
    keys: SortedKeys<'a>,
}

impl<'a> KmerIndex<'a> {
    /// Index all k-mers of `text`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if `k` is zero.
    pub fn new(text: &'a [u8], k: usize) -> Result<Self, MatchError> {
        Ok(Self {
            keys: SortedKeys::build(text, k, 1)?,
        })
    }

    /// The k-mer of `s` starting at `offset`, if it fits
    #[must_use]
    pub fn key(&self, s: &[u8], offset: usize) -> Option<Vec<u8>> {
        self.keys.key(s, offset)
    }
}

impl SubstringIndex for KmerIndex<'_> {
    fn text(&self) -> &[u8] {
        self.keys.text
    }

    fn key_len(&self) -> usize {
        self.keys.k
    }

    fn span(&self) -> usize {
        self.keys.span
    }

    fn stride(&self) -> usize {
        1
    }

    fn len(&self) -> usize {
        self.keys.offsets.len()
    }

    fn query(&self, pattern: &[u8]) -> Vec<usize> {
        self.keys.query(pattern)
    }

    /// Split the pattern into `max_mismatches + 1` contiguous segments of
    /// `pattern_len / (max_mismatches + 1)` symbols (the last one absorbs the
    /// remainder) and use the first k-mer of each segment as its key.
    fn partition(
        &self,
        pattern_len: usize,
        max_mismatches: usize,
    ) -> Result<Vec<usize>, MatchError> {
        let segments = max_mismatches.checked_add(1).ok_or_else(|| {
            MatchError::InvalidInput(format!("{max_mismatches} mismatches is out of range"))
        })?;
        let segment_len = pattern_len / segments;
        if segment_len < self.keys.k {
            return Err(MatchError::InvalidInput(format!(
                "pattern of length {pattern_len} cannot be split into {segments} segments \
                 of at least k={} symbols",
                self.keys.k
            )));
        }
        Ok((0..segments).map(|i| i * segment_len).collect())
    }
}
