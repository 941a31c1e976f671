//! Naive window-by-window matching.
//!
//! Every candidate start `0..=n-m` is examined left to right and each window
//! is compared symbol by symbol, left to right, stopping at the first
//! mismatch (or, for the mismatch-tolerant scan, once the budget is spent).

use std::collections::BTreeSet;

use crate::core::sequence::reverse_complement;
use crate::core::types::{alignment_count, SearchHits, WorkCounters};

/// Find all exact occurrences of `pattern` in `text`.
#[must_use]
pub fn naive_match(pattern: &[u8], text: &[u8]) -> SearchHits {
    let mut occurrences = Vec::new();
    let mut counters = WorkCounters::default();

    for i in 0..alignment_count(pattern.len(), text.len()) {
        counters.alignments_tried += 1;
        let mut matched = true;
        for (j, &p) in pattern.iter().enumerate() {
            counters.character_comparisons += 1;
            if text[i + j] != p {
                matched = false;
                break;
            }
        }
        if matched {
            occurrences.push(i);
        }
    }

    SearchHits::new(occurrences, counters)
}

/// Find exact occurrences of `pattern` or of its reverse complement.
///
/// Offsets from both strands are merged, deduplicated and sorted. Counters
/// cover both scans; a pattern equal to its own reverse complement is only
/// scanned once.
#[must_use]
pub fn naive_match_with_rc(pattern: &[u8], text: &[u8]) -> SearchHits {
    let forward = naive_match(pattern, text);
    let rc = reverse_complement(pattern);
    if rc == pattern {
        return forward;
    }

    let reverse = naive_match(&rc, text);
    let mut counters = forward.counters;
    counters += reverse.counters;

    let merged: BTreeSet<usize> = forward
        .occurrences
        .into_iter()
        .chain(reverse.occurrences)
        .collect();

    SearchHits::new(merged.into_iter().collect(), counters)
}

/// Find all windows of `text` that differ from `pattern` by at most
/// `max_mismatches` substitutions.
///
/// This is the brute-force reference for the index-assisted matchers.
#[must_use]
pub fn naive_mismatch_match(pattern: &[u8], text: &[u8], max_mismatches: usize) -> SearchHits {
    let mut occurrences = Vec::new();
    let mut counters = WorkCounters::default();

    for i in 0..alignment_count(pattern.len(), text.len()) {
        counters.alignments_tried += 1;
        let mut mismatches = 0;
        for (j, &p) in pattern.iter().enumerate() {
            counters.character_comparisons += 1;
            if text[i + j] != p {
                mismatches += 1;
                if mismatches > max_mismatches {
                    break;
                }
            }
        }
        if mismatches <= max_mismatches {
            occurrences.push(i);
        }
    }

    SearchHits::new(occurrences, counters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_word_counts() {
        let hits = naive_match(b"word", b"there would have been a time for such a word");
        assert_eq!(hits.occurrences, vec![40]);
        assert_eq!(hits.counters.alignments_tried, 41);
        assert_eq!(hits.counters.character_comparisons, 46);
    }

    #[test]
    fn test_naive_needle_counts() {
        let hits = naive_match(b"needle", b"needle need noodle needle");
        assert_eq!(hits.occurrences, vec![0, 19]);
        assert_eq!(hits.counters.alignments_tried, 20);
        assert_eq!(hits.counters.character_comparisons, 35);
    }

    #[test]
    fn test_naive_overlapping_occurrences() {
        let hits = naive_match(b"AA", b"AAAA");
        assert_eq!(hits.occurrences, vec![0, 1, 2]);
    }

    #[test]
    fn test_naive_empty_and_oversized() {
        assert!(naive_match(b"", b"ACGT").is_empty());
        assert!(naive_match(b"ACGT", b"").is_empty());

        let hits = naive_match(b"ACGTACGT", b"ACGT");
        assert!(hits.is_empty());
        assert_eq!(hits.counters, WorkCounters::default());
    }

    #[test]
    fn test_naive_with_rc() {
        // AGGT reverse complement is ACCT
        let text = b"TTAGGTCCACCTAA";
        assert_eq!(naive_match(b"AGGT", text).occurrences, vec![2]);
        let hits = naive_match_with_rc(b"AGGT", text);
        assert_eq!(hits.occurrences, vec![2, 8]);
        assert_eq!(hits.counters.alignments_tried, 22);
    }

    #[test]
    fn test_naive_with_rc_palindrome_scanned_once() {
        // ACGT is its own reverse complement
        let hits = naive_match_with_rc(b"ACGT", b"GACGTC");
        assert_eq!(hits.occurrences, vec![1]);
        assert_eq!(hits.counters.alignments_tried, 3);
    }

    #[test]
    fn test_naive_mismatch_match() {
        let hits = naive_mismatch_match(b"ACTTTA", b"ACTTACTTGATAAAGT", 2);
        assert_eq!(hits.occurrences, vec![0, 4]);

        // Zero budget is exact matching
        let exact = naive_mismatch_match(b"needle", b"needle need noodle needle", 0);
        assert_eq!(exact.occurrences, vec![0, 19]);
    }
}
