use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the matching, indexing and assembly routines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input too large: {0}")]
    TooLarge(String),
}

/// Work accounting for a search.
///
/// These counters never affect results; they exist to compare how much work
/// different algorithms (or index layouts) perform on the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCounters {
    /// Number of pattern alignments (candidate windows) examined
    pub alignments_tried: usize,

    /// Number of single symbol comparisons performed (one per matrix cell
    /// for dynamic programming)
    pub character_comparisons: usize,

    /// Number of index hits returned across all index queries
    #[serde(default, skip_serializing_if = "is_zero")]
    pub index_hits: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if signature
fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl WorkCounters {
    #[must_use]
    pub fn new(alignments_tried: usize, character_comparisons: usize) -> Self {
        Self {
            alignments_tried,
            character_comparisons,
            index_hits: 0,
        }
    }
}

impl std::ops::AddAssign for WorkCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.alignments_tried += rhs.alignments_tried;
        self.character_comparisons += rhs.character_comparisons;
        self.index_hits += rhs.index_hits;
    }
}

/// Result of a search: ascending, deduplicated offsets plus work counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHits {
    pub occurrences: Vec<usize>,
    pub counters: WorkCounters,
}

impl SearchHits {
    #[must_use]
    pub fn new(occurrences: Vec<usize>, counters: WorkCounters) -> Self {
        Self {
            occurrences,
            counters,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Leftmost occurrence, if any
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.occurrences.first().copied()
    }
}

/// Number of alignments a window scan considers: `n - m + 1`, or 0 when the
/// pattern is empty or longer than the text.
#[must_use]
pub fn alignment_count(pattern_len: usize, text_len: usize) -> usize {
    if pattern_len == 0 || pattern_len > text_len {
        0
    } else {
        text_len - pattern_len + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_count() {
        assert_eq!(alignment_count(4, 44), 41);
        assert_eq!(alignment_count(4, 4), 1);
        assert_eq!(alignment_count(5, 4), 0);
        assert_eq!(alignment_count(0, 4), 0);
    }

    #[test]
    fn test_counters_add_assign() {
        let mut total = WorkCounters::new(3, 7);
        total += WorkCounters {
            alignments_tried: 1,
            character_comparisons: 2,
            index_hits: 5,
        };
        assert_eq!(total.alignments_tried, 4);
        assert_eq!(total.character_comparisons, 9);
        assert_eq!(total.index_hits, 5);
    }

    #[test]
    fn test_counters_json_omits_zero_hits() {
        let json = serde_json::to_string(&WorkCounters::new(41, 46)).unwrap();
        assert_eq!(json, r#"{"alignments_tried":41,"character_comparisons":46}"#);
    }
}
