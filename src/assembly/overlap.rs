use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::core::sequence::Sequence;

/// A suffix/prefix overlap between two reads of a read set.
///
/// `read_a` and `read_b` are indices into the read set; the last `length`
/// symbols of `read_a` equal the first `length` symbols of `read_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OverlapRecord {
    pub read_a: usize,
    pub read_b: usize,
    pub length: usize,
}

/// Offset of the first occurrence of `needle` in `haystack` at or after `from`
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Length of the longest suffix of `a` of at least `min_length` symbols that
/// is a prefix of `b`, or 0 if there is none.
///
/// Candidates are occurrences of `b[..min_length]` in `a`, tried left to
/// right, so the first accepted one is the longest overlap.
///
/// ```rust
/// use seqscan::assembly::overlap;
///
/// assert_eq!(overlap(b"TTACGT", b"CGTGTGC", 3), 3);
/// assert_eq!(overlap(b"TTACGT", b"GTACGTA", 3), 0);
/// ```
#[must_use]
pub fn overlap(a: &[u8], b: &[u8], min_length: usize) -> usize {
    if a.len() < min_length || b.len() < min_length {
        return 0;
    }

    let seed = &b[..min_length];
    let mut from = 0;
    while let Some(start) = find_from(a, seed, from) {
        let suffix = &a[start..];
        if b.starts_with(suffix) {
            return suffix.len();
        }
        from = start + 1;
    }
    0
}

/// Memoized overlap lengths keyed by read content and minimum length.
#[derive(Debug, Default)]
pub struct OverlapCache {
    entries: HashMap<(Sequence, Sequence, usize), usize>,
    hits: usize,
    misses: usize,
}

impl OverlapCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lookups answered from the cache
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that had to compute the overlap
    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_or_compute(&mut self, a: &Sequence, b: &Sequence, min_length: usize) -> usize {
        let key = (a.clone(), b.clone(), min_length);
        if let Some(&length) = self.entries.get(&key) {
            self.hits += 1;
            return length;
        }
        self.misses += 1;
        let length = overlap(a, b, min_length);
        self.entries.insert(key, length);
        length
    }
}

/// Overlap computation with a cache owned by one assembly run
#[derive(Debug, Default)]
pub struct OverlapDetector {
    cache: OverlapCache,
}

impl OverlapDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized [`overlap`]
    pub fn overlap(&mut self, a: &Sequence, b: &Sequence, min_length: usize) -> usize {
        self.cache.get_or_compute(a, b, min_length)
    }

    #[must_use]
    pub fn cache(&self) -> &OverlapCache {
        &self.cache
    }
}

/// Overlaps of at least `k` symbols between every ordered pair of distinct
/// reads, sorted by `(read_a, read_b)`.
#[must_use]
pub fn naive_overlap_map(reads: &[Sequence], k: usize) -> Vec<OverlapRecord> {
    let mut records = Vec::new();
    for (i, a) in reads.iter().enumerate() {
        for (j, b) in reads.iter().enumerate() {
            if i == j {
                continue;
            }
            let length = overlap(a, b, k);
            if length > 0 {
                records.push(OverlapRecord {
                    read_a: i,
                    read_b: j,
                    length,
                });
            }
        }
    }
    records
}

/// Same records as [`naive_overlap_map`], but `overlap(a, b)` is only
/// computed when `b` contains the length-`k` suffix of `a`.
#[must_use]
pub fn overlap_map(reads: &[Sequence], k: usize) -> Vec<OverlapRecord> {
    if k == 0 {
        return naive_overlap_map(reads, k);
    }

    let mut containing: HashMap<&[u8], BTreeSet<usize>> = HashMap::new();
    for (i, read) in reads.iter().enumerate() {
        for kmer in read.windows(k) {
            containing.entry(kmer).or_default().insert(i);
        }
    }
    debug!(kmers = containing.len(), k, "Indexed read k-mers");

    let mut records = Vec::new();
    let mut tested = 0usize;
    for (i, a) in reads.iter().enumerate() {
        let Some(suffix) = a.len().checked_sub(k).map(|s| &a.as_bytes()[s..]) else {
            continue;
        };
        let Some(candidates) = containing.get(suffix) else {
            continue;
        };
        for &j in candidates {
            if j == i {
                continue;
            }
            tested += 1;
            let length = overlap(a, &reads[j], k);
            if length > 0 {
                records.push(OverlapRecord {
                    read_a: i,
                    read_b: j,
                    length,
                });
            }
        }
    }
    debug!(
        tested,
        records = records.len(),
        "Computed k-mer filtered overlap map"
    );
    records
}

/// Number of distinct reads whose suffix takes part in at least one overlap
#[must_use]
pub fn reads_with_outgoing_overlap(records: &[OverlapRecord]) -> usize {
    records
        .iter()
        .map(|r| r.read_a)
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(reads: &[&str]) -> Vec<Sequence> {
        reads.iter().map(|r| r.parse().unwrap()).collect()
    }

    #[test]
    fn test_overlap_literals() {
        assert_eq!(overlap(b"ACGGATC", b"GATCAAGT", 3), 4);
        assert_eq!(overlap(b"TTCACGGA", b"ACGGATC", 3), 5);
        assert_eq!(overlap(b"AAA", b"ZZZ", 3), 0);
    }

    #[test]
    fn test_overlap_picks_longest() {
        // Both "A" and "ATA" are suffixes that prefix b
        assert_eq!(overlap(b"GATA", b"ATAC", 1), 3);
        assert_eq!(overlap(b"ACGT", b"ACGT", 2), 4);
    }

    #[test]
    fn test_overlap_below_min_length() {
        assert_eq!(overlap(b"ACGGATC", b"GATCAAGT", 5), 0);
        assert_eq!(overlap(b"AC", b"ACGT", 3), 0);
        assert_eq!(overlap(b"ACGT", b"GT", 3), 0);
    }

    #[test]
    fn test_overlap_empty_reads() {
        assert_eq!(overlap(b"", b"", 0), 0);
        assert_eq!(overlap(b"ACGT", b"", 1), 0);
    }

    #[test]
    fn test_detector_caches_results() {
        let reads = seqs(&["ACGGATC", "GATCAAGT"]);
        let mut detector = OverlapDetector::new();
        assert_eq!(detector.overlap(&reads[0], &reads[1], 3), 4);
        assert_eq!(detector.overlap(&reads[0], &reads[1], 3), 4);
        assert_eq!(detector.overlap(&reads[0], &reads[1], 5), 0);
        assert_eq!(detector.cache().hits(), 1);
        assert_eq!(detector.cache().misses(), 2);
        assert_eq!(detector.cache().len(), 2);
    }

    #[test]
    fn test_naive_overlap_map() {
        let reads = seqs(&["ACGGATC", "GATCAAGT", "TTCACGGA"]);
        let records = naive_overlap_map(&reads, 3);
        assert_eq!(
            records,
            vec![
                OverlapRecord {
                    read_a: 0,
                    read_b: 1,
                    length: 4
                },
                OverlapRecord {
                    read_a: 2,
                    read_b: 0,
                    length: 5
                },
            ]
        );
    }

    #[test]
    fn test_kmer_filtered_map_matches_naive() {
        let reads = seqs(&["CGTACG", "TACGTA", "GTACGT", "ACGTAC", "GTACGA", "TACGAT"]);
        for k in 1..=6 {
            assert_eq!(overlap_map(&reads, k), naive_overlap_map(&reads, k), "k={k}");
        }
        assert_eq!(overlap_map(&reads, 4).len(), 12);
    }

    #[test]
    fn test_reads_with_outgoing_overlap() {
        let reads = seqs(&["CGTACG", "TACGTA", "GTACGT", "ACGTAC", "GTACGA", "TACGAT"]);
        let records = overlap_map(&reads, 4);
        // Only TACGAT has no suffix overlap
        assert_eq!(reads_with_outgoing_overlap(&records), 5);
    }

    #[test]
    fn test_duplicate_reads_stay_distinct() {
        // Equal content at different indices overlaps completely both ways
        let reads = seqs(&["ACGTT", "ACGTT"]);
        assert_eq!(
            overlap_map(&reads, 3)
                .iter()
                .map(|r| (r.read_a, r.read_b, r.length))
                .collect::<Vec<_>>(),
            vec![(0, 1, 5), (1, 0, 5)]
        );
        let reads = seqs(&["TTTT", "TTTT"]);
        let records = overlap_map(&reads, 2);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.length == 4));
    }
}
