use crate::core::types::MatchError;

use super::{SortedKeys, SubstringIndex};

/// Index of strided subsequences: `k` symbols taken every `ival` positions.
///
/// `SubsequenceIndex::new(b"ATAT", 2, 2)` holds the keys `AA` (offset 0) and
/// `TT` (offset 1). With `ival == 1` it is equivalent to a [`super::KmerIndex`].
#[derive(Debug, Clone)]
pub struct SubsequenceIndex<'a> {
    keys: SortedKeys<'a>,
}

impl<'a> SubsequenceIndex<'a> {
    /// Index every strided subsequence of `text`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if `k` or `ival` is zero.
    pub fn new(text: &'a [u8], k: usize, ival: usize) -> Result<Self, MatchError> {
        Ok(Self {
            keys: SortedKeys::build(text, k, ival)?,
        })
    }

    /// The strided key of `s` starting at `offset`, if it fits
    #[must_use]
    pub fn key(&self, s: &[u8], offset: usize) -> Option<Vec<u8>> {
        self.keys.key(s, offset)
    }
}

impl SubstringIndex for SubsequenceIndex<'_> {
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
        self.keys.stride
    }

    fn len(&self) -> usize {
        self.keys.offsets.len()
    }

    fn query(&self, pattern: &[u8]) -> Vec<usize> {
        self.keys.query(pattern)
    }

    /// Interleaved partition: key `i` takes pattern positions
    /// `i, i + ival, ..., i + ival * (k - 1)` for `i` in `0..=max_mismatches`.
    /// Distinct start residues keep the keys disjoint.
    fn partition(
        &self,
        pattern_len: usize,
        max_mismatches: usize,
    ) -> Result<Vec<usize>, MatchError> {
        let ival = self.keys.stride;
        let span = self.keys.span;
        if max_mismatches >= ival {
            return Err(MatchError::InvalidInput(format!(
                "stride ival={ival} yields at most {ival} disjoint subsequences, \
                 {} are needed for {max_mismatches} mismatches",
                max_mismatches.saturating_add(1)
            )));
        }
        if max_mismatches
            .checked_add(span)
            .map_or(true, |needed| needed > pattern_len)
        {
            return Err(MatchError::InvalidInput(format!(
                "pattern of length {pattern_len} is too short for {} subsequences spanning {span}",
                max_mismatches + 1
            )));
        }
        Ok((0..=max_mismatches).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_strided() {
        let index = SubsequenceIndex::new(b"ATAT", 2, 2).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.span(), 3);
        assert_eq!(index.key(b"ATAT", 0), Some(b"AA".to_vec()));
        assert_eq!(index.key(b"ATAT", 1), Some(b"TT".to_vec()));
        assert_eq!(index.query(b"ACA"), vec![0]);
        assert_eq!(index.query(b"TGT"), vec![1]);
    }

    #[test]
    fn test_query_uses_first_subsequence() {
        let text = b"to-morrow and to-morrow and to-morrow creeps in this petty pace";
        let index = SubsequenceIndex::new(text, 8, 3).unwrap();
        assert_eq!(index.span(), 22);
        let pattern = b"to-morrow and to-morrow ";
        // Only the first key (every third symbol from offset 0) is used
        assert_eq!(index.query(pattern), vec![0, 14]);
        assert_eq!(index.query(&pattern[1..]), vec![1, 15]);
    }

    #[test]
    fn test_unit_stride_matches_kmer_index() {
        use crate::index::KmerIndex;

        let text = b"ACGGTACGTTAGACGGA";
        let sub = SubsequenceIndex::new(text, 3, 1).unwrap();
        let kmer = KmerIndex::new(text, 3).unwrap();
        for i in 0..=text.len() - 3 {
            assert_eq!(sub.query(&text[i..]), kmer.query(&text[i..]));
        }
    }

    #[test]
    fn test_partition_interleaved() {
        let index = SubsequenceIndex::new(b"ACGT", 8, 3).unwrap();
        assert_eq!(index.partition(24, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(index.partition(24, 1).unwrap(), vec![0, 1]);
        // ival=3 cannot give four disjoint keys
        assert!(index.partition(24, 3).is_err());
        // span 22 + 2 offsets does not fit in 23
        assert!(index.partition(23, 2).is_err());
    }

    #[test]
    fn test_zero_stride_rejected() {
        assert!(SubsequenceIndex::new(b"ACGT", 2, 0).is_err());
    }

    #[test]
    fn test_out_of_range_layouts_rejected() {
        assert!(matches!(
            SubsequenceIndex::new(b"ACGTACGTACGT", 3, usize::MAX / 2 + 1),
            Err(MatchError::InvalidInput(_))
        ));

        let err = SubsequenceIndex::new(b"ACGT", 2, usize::MAX).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(_)));

        let index = SubsequenceIndex::new(b"ACGT", 2, 3).unwrap();
        assert!(index.partition(24, usize::MAX).is_err());
        assert!(index.partition(usize::MAX, 2).is_ok());
    }
}
