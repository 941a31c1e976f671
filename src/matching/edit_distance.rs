//! Edit distance and end-free approximate matching by dynamic programming.
//!
//! Both entry points fill a `(m+1) x (n+1)` matrix with the recurrence
//!
//! ```text
//! D[i][j] = min(D[i][j-1] + 1, D[i-1][j] + 1, D[i-1][j-1] + (x[i-1] != y[j-1]))
//! ```
//!
//! and differ only in the first row:
//!
//! | Boundary  | `D[i][0]` | `D[0][j]` | Result            |
//! |-----------|-----------|-----------|-------------------|
//! | Global    | `i`       | `j`       | `D[m][n]`         |
//! | End-free  | `i`       | `0`       | `min_j D[m][j]`   |
//!
//! The end-free variant lets the whole pattern align against any substring
//! of the text: it may start and end anywhere in the text at no cost.

use serde::Serialize;

use crate::core::types::MatchError;

/// First-row policy of the DP matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Both strings aligned end to end
    Global,
    /// Pattern aligned end to end; text start and end are free
    EndFree,
}

/// A filled edit-distance matrix, stored row-major.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Fill the matrix for `x` (rows) against `y` (columns).
    #[must_use]
    pub fn fill(x: &[u8], y: &[u8], boundary: Boundary) -> Self {
        let rows = x.len() + 1;
        let cols = y.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 0..rows {
            cells[i * cols] = i;
        }
        if boundary == Boundary::Global {
            for (j, cell) in cells.iter_mut().enumerate().take(cols) {
                *cell = j;
            }
        }

        for i in 1..rows {
            for j in 1..cols {
                let hor = cells[i * cols + j - 1] + 1;
                let ver = cells[(i - 1) * cols + j] + 1;
                let diag = cells[(i - 1) * cols + j - 1] + usize::from(x[i - 1] != y[j - 1]);
                cells[i * cols + j] = hor.min(ver).min(diag);
            }
        }

        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The bottom row `D[m][*]`
    #[must_use]
    pub fn last_row(&self) -> &[usize] {
        &self.cells[(self.rows - 1) * self.cols..]
    }

    /// The bottom-right cell `D[m][n]`
    #[must_use]
    pub fn corner(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// Number of cells a DP over inputs of these lengths allocates
#[must_use]
pub fn matrix_cells(x_len: usize, y_len: usize) -> usize {
    x_len.saturating_add(1).saturating_mul(y_len.saturating_add(1))
}

/// Minimum number of substitutions, insertions and deletions turning `x` into `y`.
#[must_use]
pub fn edit_distance(x: &[u8], y: &[u8]) -> usize {
    DistanceMatrix::fill(x, y, Boundary::Global).corner()
}

/// Minimum edit distance between the whole `pattern` and any substring of `text`.
#[must_use]
pub fn approximate_end_free_match(pattern: &[u8], text: &[u8]) -> usize {
    approximate_match(pattern, text).distance
}

/// Best end-free alignment of a pattern within a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproximateMatch {
    /// Minimum edit distance of the pattern against any text substring
    pub distance: usize,

    /// Text offsets (exclusive ends) where that minimum is attained, ascending
    pub end_offsets: Vec<usize>,
}

/// End-free match reporting every text end position achieving the minimum.
#[must_use]
pub fn approximate_match(pattern: &[u8], text: &[u8]) -> ApproximateMatch {
    let matrix = DistanceMatrix::fill(pattern, text, Boundary::EndFree);
    let last_row = matrix.last_row();
    let distance = last_row.iter().copied().min().unwrap_or_default();
    let end_offsets = last_row
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == distance)
        .map(|(j, _)| j)
        .collect();

    ApproximateMatch {
        distance,
        end_offsets,
    }
}

/// Count mismatching positions between two equal-length keys.
///
/// # Errors
///
/// Returns `MatchError::InvalidInput` if the keys differ in length.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize, MatchError> {
    if a.len() != b.len() {
        return Err(MatchError::InvalidInput(format!(
            "cannot compare keys of different lengths ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basic() {
        assert_eq!(edit_distance(b"shake spea", b"Shakespear"), 3);
        assert_eq!(edit_distance(b"GCGTATGC", b"TATTGGCTATACGGTT"), 11);
        assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
    }

    #[test]
    fn test_edit_distance_empty() {
        assert_eq!(edit_distance(b"", b""), 0);
        assert_eq!(edit_distance(b"", b"ACG"), 3);
        assert_eq!(edit_distance(b"ACG", b""), 3);
    }

    #[test]
    fn test_edit_distance_symmetric() {
        let x = b"GATTACA";
        let y = b"GCATGCT";
        assert_eq!(edit_distance(x, y), edit_distance(y, x));
    }

    #[test]
    fn test_approximate_end_free_match() {
        assert_eq!(
            approximate_end_free_match(b"GCGTATGC", b"TATTGGCTATACGGTT"),
            2
        );
    }

    #[test]
    fn test_approximate_match_end_offsets() {
        let m = approximate_match(b"GCGTATGC", b"TATTGGCTATACGGTT");
        assert_eq!(m.distance, 2);
        assert_eq!(m.end_offsets, vec![12]);

        // Exact substring costs nothing
        let m = approximate_match(b"ACG", b"TTACGTT");
        assert_eq!(m.distance, 0);
        assert_eq!(m.end_offsets, vec![5]);
    }

    #[test]
    fn test_boundary_policies_differ() {
        let global = DistanceMatrix::fill(b"AC", b"GGAC", Boundary::Global);
        let free = DistanceMatrix::fill(b"AC", b"GGAC", Boundary::EndFree);
        assert_eq!(global.dimensions(), (3, 5));
        assert_eq!(global.get(0, 4), 4);
        assert_eq!(free.get(0, 4), 0);
        assert_eq!(global.corner(), 2);
        assert_eq!(free.corner(), 0);
    }

    #[test]
    fn test_end_free_degenerate_inputs() {
        // Empty pattern matches anywhere
        assert_eq!(approximate_end_free_match(b"", b"ACGT"), 0);
        // Empty text: pattern must be deleted entirely
        assert_eq!(approximate_end_free_match(b"ACGT", b""), 4);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(b"AAAA", b"AATA"), Ok(1));
        assert_eq!(hamming_distance(b"", b""), Ok(0));
        assert!(matches!(
            hamming_distance(b"AAA", b"AA"),
            Err(MatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_matrix_cells() {
        assert_eq!(matrix_cells(8, 16), 9 * 17);
        assert_eq!(matrix_cells(usize::MAX, 1), usize::MAX);
    }
}
