use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::types::{MatchError, SearchHits, WorkCounters};
use crate::index::{KmerIndex, SubsequenceIndex, SubstringIndex};
use crate::matching::boyer_moore::BoyerMooreMatcher;
use crate::matching::edit_distance::approximate_match;
use crate::matching::naive::{naive_match, naive_match_with_rc, naive_mismatch_match};
use crate::matching::pigeonhole::PigeonholeMatcher;
use crate::utils::validation::check_dp_cells;

/// Default number of substitutions allowed by the mismatch strategies
pub const DEFAULT_MAX_MISMATCHES: usize = 2;

/// Default index key length
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Default subsequence index stride
pub const DEFAULT_IVAL: usize = 3;

/// Search strategy run by the [`SearchEngine`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Exact naive scan
    #[default]
    Naive,
    /// Exact naive scan of the pattern and its reverse complement
    NaiveRc,
    /// Exact Boyer-Moore search
    BoyerMoore,
    /// Pigeonhole mismatch search over a k-mer index
    Kmer,
    /// Pigeonhole mismatch search over a strided subsequence index
    Subsequence,
    /// Brute-force mismatch scan
    Mismatch,
    /// End-free edit distance; reports end offsets of the best alignments
    EditDistance,
}

impl SearchAlgorithm {
    /// Whether the strategy needs an index built over the reference
    #[must_use]
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Kmer | Self::Subsequence)
    }
}

impl std::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Naive => "naive",
            Self::NaiveRc => "naive-rc",
            Self::BoyerMoore => "boyer-moore",
            Self::Kmer => "kmer",
            Self::Subsequence => "subsequence",
            Self::Mismatch => "mismatch",
            Self::EditDistance => "edit-distance",
        };
        write!(f, "{name}")
    }
}

/// Configuration for the search engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: SearchAlgorithm,
    /// Substitutions allowed by `kmer`, `subsequence` and `mismatch`
    pub max_mismatches: usize,
    /// Index key length
    pub k: usize,
    /// Subsequence index stride
    pub ival: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::default(),
            max_mismatches: DEFAULT_MAX_MISMATCHES,
            k: DEFAULT_KEY_LENGTH,
            ival: DEFAULT_IVAL,
        }
    }
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,

    /// Start offsets of the matches; exclusive end offsets for `edit-distance`.
    ///
    /// For `edit-distance` no windows are aligned, so `alignments_tried` is 0
    /// and `character_comparisons` counts filled matrix cells, each of which
    /// compares one pattern symbol with one text symbol.
    pub hits: SearchHits,

    /// Best end-free edit distance, only set for `edit-distance`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

/// Runs the configured strategy against one reference.
///
/// Indexed strategies build their index once in [`SearchEngine::new`] and
/// reuse it for every pattern.
pub struct SearchEngine<'a> {
    reference: &'a [u8],
    config: SearchConfig,
    index: Option<Box<dyn SubstringIndex + 'a>>,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over `reference`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if an index is required and `k` or
    /// `ival` is zero, or the key span does not fit in a `usize`.
    pub fn new(reference: &'a [u8], config: SearchConfig) -> Result<Self, MatchError> {
        let index: Option<Box<dyn SubstringIndex + 'a>> = match config.algorithm {
            SearchAlgorithm::Kmer => Some(Box::new(KmerIndex::new(reference, config.k)?)),
            SearchAlgorithm::Subsequence => Some(Box::new(SubsequenceIndex::new(
                reference,
                config.k,
                config.ival,
            )?)),
            _ => None,
        };

        if let Some(index) = &index {
            info!(
                entries = index.len(),
                k = index.key_len(),
                stride = index.stride(),
                "Built {} index",
                config.algorithm
            );
        }

        Ok(Self {
            reference,
            config,
            index,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn reference(&self) -> &[u8] {
        self.reference
    }

    /// Search for `pattern` in the reference.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if the pigeonhole layout does not
    /// fit the pattern, or `MatchError::TooLarge` if the edit-distance matrix
    /// would exceed `MAX_DP_CELLS`.
    pub fn search(&self, pattern: &[u8]) -> Result<SearchReport, MatchError> {
        let algorithm = self.config.algorithm;
        let mut edit_distance = None;

        let hits = match algorithm {
            SearchAlgorithm::Naive => naive_match(pattern, self.reference),
            SearchAlgorithm::NaiveRc => naive_match_with_rc(pattern, self.reference),
            SearchAlgorithm::BoyerMoore => BoyerMooreMatcher::new(pattern).find_all(self.reference),
            SearchAlgorithm::Mismatch => {
                naive_mismatch_match(pattern, self.reference, self.config.max_mismatches)
            }
            SearchAlgorithm::Kmer | SearchAlgorithm::Subsequence => {
                let index = self.index.as_deref().ok_or_else(|| {
                    MatchError::InvalidInput(format!("no index built for {algorithm}"))
                })?;
                PigeonholeMatcher::new(index, self.config.max_mismatches).find_all(pattern)?
            }
            SearchAlgorithm::EditDistance => {
                if let Some(msg) = check_dp_cells(pattern.len(), self.reference.len()) {
                    return Err(MatchError::TooLarge(msg));
                }
                let best = approximate_match(pattern, self.reference);
                edit_distance = Some(best.distance);
                let cells = pattern.len() * self.reference.len();
                SearchHits::new(best.end_offsets, WorkCounters::new(0, cells))
            }
        };

        debug!(
            %algorithm,
            matches = hits.occurrences.len(),
            alignments = hits.counters.alignments_tried,
            comparisons = hits.counters.character_comparisons,
            index_hits = hits.counters.index_hits,
            "Search finished"
        );

        Ok(SearchReport {
            algorithm,
            hits,
            edit_distance,
        })
    }
}
