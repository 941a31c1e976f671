//! Fragment assembly: suffix/prefix overlaps and shortest common superstrings.
//!
//! - [`overlap`]: overlap length between two reads, overlap maps over a read set
//! - [`greedy`]: greedy SCS, repeatedly merging the pair with the largest overlap
//! - [`scs`]: exact SCS by trying every read ordering, for small read sets
//!
//! Every strategy returns an [`Assembly`] recording the merges it performed,
//! so that `sequence.len() == total read length - sum of merge overlaps`.
//!
//! ## Example
//!
//! ```rust
//! use seqscan::assembly::GreedyAssembler;
//! use seqscan::Sequence;
//!
//! let reads: Vec<Sequence> = ["ACGGATC", "GATCAAGT", "TTCACGGA"]
//!     .iter()
//!     .map(|r| r.parse().unwrap())
//!     .collect();
//!
//! let assembly = GreedyAssembler::new(reads, 3).assemble();
//! assert_eq!(assembly.sequence.to_string(), "TTCACGGATCAAGT");
//! assert_eq!(assembly.merges.len(), 2);
//! ```

pub mod greedy;
pub mod overlap;
pub mod scs;

pub use greedy::{assemble_from_overlaps, GreedyAssembler};
pub use overlap::{
    naive_overlap_map, overlap, overlap_map, OverlapCache, OverlapDetector, OverlapRecord,
};
pub use scs::{scs_list, shortest_common_superstring};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::sequence::Sequence;
use crate::core::types::MatchError;
use crate::utils::validation::check_greedy_reads;

/// Default minimum overlap length for merging two reads
pub const DEFAULT_MIN_OVERLAP: usize = 3;

/// How reads are combined into a superstring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblyStrategy {
    /// Repeatedly merge the pair with the largest overlap
    #[default]
    Greedy,
    /// One pass over a precomputed k-mer filtered overlap map
    OverlapMap,
    /// Try every read ordering (small read sets only)
    Exact,
}

/// Configuration for an assembly run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub strategy: AssemblyStrategy,
    /// Minimum overlap length for a merge; ignored by `exact`, which merges
    /// on any overlap of at least one symbol
    pub min_overlap: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            strategy: AssemblyStrategy::default(),
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }
}

/// One merge of two reads (or partial assemblies)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStep {
    pub left: Sequence,
    pub right: Sequence,
    /// Number of symbols of `right` covered by the suffix of `left`
    pub overlap: usize,
}

/// Result of an assembly run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    /// The assembled superstring: `contigs` concatenated in order
    pub sequence: Sequence,

    /// Merges in the order they were performed
    pub merges: Vec<MergeStep>,

    /// Pieces left when no further merge qualified
    pub contigs: Vec<Sequence>,
}

impl Assembly {
    fn from_contigs(contigs: Vec<Sequence>, merges: Vec<MergeStep>) -> Self {
        Self {
            sequence: Sequence::concat(&contigs),
            merges,
            contigs,
        }
    }

    /// Total number of symbols saved by merging
    #[must_use]
    pub fn total_overlap(&self) -> usize {
        self.merges.iter().map(|m| m.overlap).sum()
    }
}

/// Assemble `reads` with the configured strategy.
///
/// # Errors
///
/// Returns `MatchError::TooLarge` if the `exact` strategy is asked to order
/// more than `MAX_EXACT_SCS_READS` reads, or the `greedy` strategy gets more
/// than `MAX_GREEDY_READS`.
pub fn assemble(reads: Vec<Sequence>, config: &AssemblyConfig) -> Result<Assembly, MatchError> {
    let read_count = reads.len();
    let assembly = match config.strategy {
        AssemblyStrategy::Greedy => {
            if let Some(msg) = check_greedy_reads(read_count) {
                return Err(MatchError::TooLarge(msg));
            }
            GreedyAssembler::new(reads, config.min_overlap).assemble()
        }
        AssemblyStrategy::OverlapMap => {
            let records = overlap_map(&reads, config.min_overlap);
            assemble_from_overlaps(&reads, &records)
        }
        AssemblyStrategy::Exact => shortest_common_superstring(&reads)?,
    };

    info!(
        reads = read_count,
        merges = assembly.merges.len(),
        contigs = assembly.contigs.len(),
        length = assembly.sequence.len(),
        "Assembled reads"
    );
    Ok(assembly)
}
