//! Input limits and small shared helpers.
//!
//! The `check_*` functions are called before superlinear work starts. Each
//! returns `None` when the input is within bounds, or a message describing
//! the exceeded limit.

/// Maximum number of cells an edit-distance matrix may allocate
pub const MAX_DP_CELLS: usize = 50_000_000;

/// Maximum number of reads for exact (permutation) SCS: 9! orderings
pub const MAX_EXACT_SCS_READS: usize = 9;

/// Maximum number of reads for greedy assembly, which compares every
/// ordered pair on each merge
pub const MAX_GREEDY_READS: usize = 20_000;

/// Maximum number of reads in a single read set
pub const MAX_READS: usize = 200_000;

/// Check that a DP matrix over inputs of these lengths fits in the cell budget.
#[must_use]
pub fn check_dp_cells(x_len: usize, y_len: usize) -> Option<String> {
    let cells = crate::matching::edit_distance::matrix_cells(x_len, y_len);
    if cells > MAX_DP_CELLS {
        Some(format!(
            "Edit distance of {x_len} x {y_len} symbols needs {cells} cells, \
             exceeding maximum of {MAX_DP_CELLS}"
        ))
    } else {
        None
    }
}

/// Check that exact SCS over `count` reads is tractable.
#[must_use]
pub fn check_exact_scs_reads(count: usize) -> Option<String> {
    if count > MAX_EXACT_SCS_READS {
        Some(format!(
            "Exact SCS over {count} reads exceeds maximum of {MAX_EXACT_SCS_READS}; \
             use the greedy assembler instead"
        ))
    } else {
        None
    }
}

/// Check that greedy assembly over `count` reads is tractable.
#[must_use]
pub fn check_greedy_reads(count: usize) -> Option<String> {
    if count > MAX_GREEDY_READS {
        Some(format!(
            "Greedy assembly over {count} reads exceeds maximum of {MAX_GREEDY_READS}; \
             use the overlap-map assembler instead"
        ))
    } else {
        None
    }
}

/// Check if adding another read would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new read.
#[must_use]
pub fn check_read_limit(count: usize) -> Option<String> {
    if count >= MAX_READS {
        Some(format!(
            "Too many reads: adding another would exceed maximum of {MAX_READS}"
        ))
    } else {
        None
    }
}

/// Lowercase hex MD5 digest of a sequence.
///
/// # Examples
///
/// ```
/// use seqscan::utils::validation::sequence_md5;
///
/// assert_eq!(sequence_md5(b"ACGT"), "f1f8f4bf413b16ad135722aa4591043e");
/// ```
#[must_use]
pub fn sequence_md5(sequence: &[u8]) -> String {
    let digest = md5::compute(sequence);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dp_cells() {
        assert!(check_dp_cells(100, 100).is_none());
        assert!(check_dp_cells(0, MAX_DP_CELLS - 1).is_none());
        assert!(check_dp_cells(1, MAX_DP_CELLS).is_some());
        assert!(check_dp_cells(usize::MAX, usize::MAX).is_some());
    }

    #[test]
    fn test_check_exact_scs_reads() {
        assert!(check_exact_scs_reads(0).is_none());
        assert!(check_exact_scs_reads(MAX_EXACT_SCS_READS).is_none());
        assert!(check_exact_scs_reads(MAX_EXACT_SCS_READS + 1).is_some());
    }

    #[test]
    fn test_check_greedy_reads() {
        assert!(check_greedy_reads(0).is_none());
        assert!(check_greedy_reads(MAX_GREEDY_READS).is_none());
        assert!(check_greedy_reads(MAX_GREEDY_READS + 1)
            .is_some_and(|msg| msg.contains("overlap-map")));
    }

    #[test]
    fn test_check_read_limit() {
        assert!(check_read_limit(100).is_none());
        assert!(check_read_limit(MAX_READS - 1).is_none());
        assert!(check_read_limit(MAX_READS).is_some());
    }

    #[test]
    fn test_sequence_md5() {
        assert_eq!(sequence_md5(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(sequence_md5(b"ACGT"), sequence_md5(b"ACGT"));
        assert_eq!(sequence_md5(b"ACGT").len(), 32);
    }
}
