//! Exact shortest common superstring by exhaustive ordering.
//!
//! Every permutation of the reads is merged left to right, each adjacent
//! pair overlapping by its longest suffix/prefix overlap of at least one
//! symbol. Cost grows factorially, so inputs are capped at
//! [`MAX_EXACT_SCS_READS`].

use itertools::Itertools;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::MatchError;
use crate::utils::validation::{check_exact_scs_reads, MAX_EXACT_SCS_READS};

use super::overlap::OverlapDetector;
use super::{Assembly, MergeStep};

/// Every shortest superstring found, in permutation order.
///
/// Permutations are enumerated in lexicographic order of read indices.
/// Distinct orderings yielding equal strings each contribute an entry.
///
/// # Errors
///
/// Returns `MatchError::TooLarge` for more than `MAX_EXACT_SCS_READS` reads.
pub fn scs_list(reads: &[Sequence]) -> Result<Vec<Sequence>, MatchError> {
    let orders = minimal_orderings(reads)?;
    let mut detector = OverlapDetector::new();
    Ok(orders
        .into_iter()
        .map(|order| superstring(reads, &order, &mut detector).0)
        .collect())
}

/// The first shortest superstring of [`scs_list`], with its merges.
///
/// # Errors
///
/// Returns `MatchError::TooLarge` for more than `MAX_EXACT_SCS_READS` reads.
pub fn shortest_common_superstring(reads: &[Sequence]) -> Result<Assembly, MatchError> {
    let Some(order) = minimal_orderings(reads)?.into_iter().next() else {
        return Ok(Assembly::from_contigs(Vec::new(), Vec::new()));
    };
    let (sequence, merges) = superstring(reads, &order, &mut OverlapDetector::new());
    Ok(Assembly::from_contigs(vec![sequence], merges))
}

/// Orderings whose superstring has minimal length
fn minimal_orderings(reads: &[Sequence]) -> Result<Vec<Vec<usize>>, MatchError> {
    if let Some(msg) = check_exact_scs_reads(reads.len()) {
        return Err(MatchError::TooLarge(msg));
    }
    if reads.is_empty() {
        return Ok(Vec::new());
    }

    let mut detector = OverlapDetector::new();
    let total: usize = reads.iter().map(|r| r.len()).sum();
    let mut best_len = usize::MAX;
    let mut best = Vec::new();

    for order in (0..reads.len()).permutations(reads.len()) {
        let saved: usize = order
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| detector.overlap(&reads[a], &reads[b], 1))
            .sum();
        let len = total - saved;
        if len < best_len {
            best_len = len;
            best.clear();
        }
        if len == best_len {
            best.push(order);
        }
    }

    debug!(
        reads = reads.len(),
        max_reads = MAX_EXACT_SCS_READS,
        shortest = best_len,
        solutions = best.len(),
        "Enumerated read orderings"
    );
    Ok(best)
}

fn superstring(
    reads: &[Sequence],
    order: &[usize],
    detector: &mut OverlapDetector,
) -> (Sequence, Vec<MergeStep>) {
    let mut merges = Vec::with_capacity(order.len().saturating_sub(1));
    let mut sequence = reads[order[0]].clone();
    for (&a, &b) in order.iter().tuple_windows() {
        let olen = detector.overlap(&reads[a], &reads[b], 1);
        sequence = sequence.merge(&reads[b], olen);
        merges.push(MergeStep {
            left: reads[a].clone(),
            right: reads[b].clone(),
            overlap: olen,
        });
    }
    (sequence, merges)
}
