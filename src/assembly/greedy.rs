use tracing::{debug, info};

use crate::core::sequence::Sequence;

use super::overlap::{OverlapDetector, OverlapRecord};
use super::{Assembly, MergeStep};

/// Greedy shortest-common-superstring assembler.
///
/// Owns the read pool and the overlap cache for one run. Each step merges
/// the ordered pair `(a, b)` with the largest overlap of at least
/// `min_overlap`; both reads leave the pool and `a + b[overlap..]` is
/// appended at its end. When several pairs share the largest overlap, the
/// first one in pool order (`a` outer, `b` inner) wins.
#[derive(Debug)]
pub struct GreedyAssembler {
    pool: Vec<Sequence>,
    min_overlap: usize,
    detector: OverlapDetector,
}

impl GreedyAssembler {
    #[must_use]
    pub fn new(reads: Vec<Sequence>, min_overlap: usize) -> Self {
        Self {
            pool: reads,
            min_overlap,
            detector: OverlapDetector::new(),
        }
    }

    /// Reads (and merged reads) currently in the pool
    #[must_use]
    pub fn pool(&self) -> &[Sequence] {
        &self.pool
    }

    #[must_use]
    pub fn detector(&self) -> &OverlapDetector {
        &self.detector
    }

    /// Pool indices and length of the maximal overlap, if any qualifies
    fn pick_maximal_overlap(&mut self) -> Option<(usize, usize, usize)> {
        let mut best = None;
        let mut best_len = 0;
        for i in 0..self.pool.len() {
            for j in 0..self.pool.len() {
                if i == j {
                    continue;
                }
                let olen = self
                    .detector
                    .overlap(&self.pool[i], &self.pool[j], self.min_overlap);
                if olen > best_len {
                    best = Some((i, j, olen));
                    best_len = olen;
                }
            }
        }
        best
    }

    /// Perform one merge. Returns `None` once no pair overlaps enough.
    pub fn step(&mut self) -> Option<MergeStep> {
        let (i, j, olen) = self.pick_maximal_overlap()?;

        // remove the higher index first so the lower one stays valid
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        let removed_hi = self.pool.remove(hi);
        let removed_lo = self.pool.remove(lo);
        let (left, right) = if i > j {
            (removed_hi, removed_lo)
        } else {
            (removed_lo, removed_hi)
        };

        self.pool.push(left.merge(&right, olen));
        debug!(
            overlap = olen,
            left_len = left.len(),
            right_len = right.len(),
            pool = self.pool.len(),
            "Merged reads"
        );

        Some(MergeStep {
            left,
            right,
            overlap: olen,
        })
    }

    /// Merge until no pair qualifies, then concatenate what is left.
    #[must_use]
    pub fn assemble(mut self) -> Assembly {
        let reads = self.pool.len();
        let mut merges = Vec::new();
        while let Some(merge) = self.step() {
            merges.push(merge);
        }

        let cache = self.detector.cache();
        info!(
            reads,
            merges = merges.len(),
            cache_hits = cache.hits(),
            cache_misses = cache.misses(),
            "Greedy assembly finished"
        );

        Assembly::from_contigs(self.pool, merges)
    }
}

/// Single-pass assembly over precomputed overlap records.
///
/// Records are visited by decreasing length (ties by `(read_a, read_b)`). A
/// record is merged only while neither of its reads has been merged yet, so
/// merged reads are never extended further. The result is the remaining
/// original reads in input order followed by the merges in creation order.
#[must_use]
pub fn assemble_from_overlaps(reads: &[Sequence], records: &[OverlapRecord]) -> Assembly {
    let mut ordered: Vec<&OverlapRecord> = records.iter().collect();
    ordered.sort_by(|x, y| {
        y.length
            .cmp(&x.length)
            .then(x.read_a.cmp(&y.read_a))
            .then(x.read_b.cmp(&y.read_b))
    });

    let mut unmerged = vec![true; reads.len()];
    let mut merged = Vec::new();
    let mut merges = Vec::new();

    for record in ordered {
        let (a, b) = (record.read_a, record.read_b);
        if a == b || a >= reads.len() || b >= reads.len() || !unmerged[a] || !unmerged[b] {
            continue;
        }
        unmerged[a] = false;
        unmerged[b] = false;
        merged.push(reads[a].merge(&reads[b], record.length));
        merges.push(MergeStep {
            left: reads[a].clone(),
            right: reads[b].clone(),
            overlap: record.length,
        });
    }

    let contigs = reads
        .iter()
        .zip(&unmerged)
        .filter(|(_, keep)| **keep)
        .map(|(read, _)| read.clone())
        .chain(merged)
        .collect();

    debug!(
        records = records.len(),
        merges = merges.len(),
        "Overlap map assembly finished"
    );

    Assembly::from_contigs(contigs, merges)
}
