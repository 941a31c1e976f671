//! Index-assisted approximate matching with the pigeonhole principle.
//!
//! If a pattern matches a window with at most `d` substitutions and is split
//! into `d + 1` disjoint parts, at least one part matches exactly. Each part
//! is looked up in a [`SubstringIndex`]; every hit proposes a window start,
//! which is verified by counting mismatches over the rest of the pattern.
//!
//! Insertions and deletions are not considered.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::types::{MatchError, SearchHits, WorkCounters};
use crate::index::SubstringIndex;

/// Bounded-mismatch matcher over an index of the text
#[derive(Debug)]
pub struct PigeonholeMatcher<'i, I: SubstringIndex + ?Sized> {
    index: &'i I,
    max_mismatches: usize,
}

impl<'i, I: SubstringIndex + ?Sized> PigeonholeMatcher<'i, I> {
    #[must_use]
    pub fn new(index: &'i I, max_mismatches: usize) -> Self {
        Self {
            index,
            max_mismatches,
        }
    }

    #[must_use]
    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }

    /// Find every window of the indexed text within `max_mismatches`
    /// substitutions of `pattern`.
    ///
    /// `counters.index_hits` totals the hits of all index queries. A window
    /// already accepted through an earlier key is not verified again.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if the index cannot partition a
    /// pattern of this length into `max_mismatches + 1` disjoint keys.
    pub fn find_all(&self, pattern: &[u8]) -> Result<SearchHits, MatchError> {
        let mut counters = WorkCounters::default();
        if pattern.is_empty() {
            return Ok(SearchHits::new(Vec::new(), counters));
        }

        let d = self.max_mismatches;
        let text = self.index.text();
        let key_offsets = self.index.partition(pattern.len(), d)?;
        let (k, stride) = (self.index.key_len(), self.index.stride());

        let mut accepted = BTreeSet::new();
        let mut in_key = vec![false; pattern.len()];

        for &key_offset in &key_offsets {
            in_key.iter_mut().for_each(|c| *c = false);
            for j in 0..k {
                let covered = j
                    .checked_mul(stride)
                    .and_then(|s| s.checked_add(key_offset))
                    .and_then(|pos| in_key.get_mut(pos))
                    .ok_or_else(|| {
                        MatchError::InvalidInput(format!(
                            "key at pattern offset {key_offset} runs past a pattern of length {}",
                            pattern.len()
                        ))
                    })?;
                *covered = true;
            }

            let hits = self.index.query(&pattern[key_offset..]);
            counters.index_hits += hits.len();

            for hit in hits {
                // window would start before the text or run past its end
                let Some(start) = hit.checked_sub(key_offset) else {
                    continue;
                };
                if start + pattern.len() > text.len() || accepted.contains(&start) {
                    continue;
                }

                counters.alignments_tried += 1;
                let mut mismatches = 0;
                for (j, &p) in pattern.iter().enumerate() {
                    if in_key[j] {
                        continue;
                    }
                    counters.character_comparisons += 1;
                    if text[start + j] != p {
                        mismatches += 1;
                        if mismatches > d {
                            break;
                        }
                    }
                }
                if mismatches <= d {
                    accepted.insert(start);
                }
            }
        }

        debug!(
            keys = key_offsets.len(),
            index_hits = counters.index_hits,
            matches = accepted.len(),
            "Pigeonhole search finished"
        );

        Ok(SearchHits::new(accepted.into_iter().collect(), counters))
    }
}
