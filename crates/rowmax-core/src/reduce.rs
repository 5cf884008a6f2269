//! Row-sum reduction primitives.
//!
//! The central type is [`MaxRow`], a value+index pair. Carrying the row
//! index through every merge step (rather than reducing the value and the
//! index independently) is what keeps the winning sum paired with the row
//! it came from, no matter how the partial results are combined.

use crate::matrix::Matrix;

/// The best row seen so far: its element sum and its *global* row index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxRow {
    /// Sum of the row's elements.
    pub sum: f64,
    /// Global (whole-matrix) index of the row.
    pub row: usize,
}

impl MaxRow {
    /// Identity element for [`MaxRow::combine`]: loses every strict
    /// comparison against a row with a finite sum. Returned by workers
    /// whose block holds no rows.
    pub const SENTINEL: MaxRow = MaxRow {
        sum: f64::NEG_INFINITY,
        row: 0,
    };

    /// Whether this is the empty-block sentinel rather than a real row.
    pub fn is_sentinel(&self) -> bool {
        self.sum == f64::NEG_INFINITY
    }

    /// Merge two partial results: the larger sum wins, ties go to the
    /// lower row index.
    ///
    /// The operation is associative and commutative, so a reduction may
    /// apply it in any tree shape (pairwise, ring, or flat gather) and
    /// still produce the same pair on every worker.
    pub fn combine(a: MaxRow, b: MaxRow) -> MaxRow {
        if a.sum > b.sum {
            a
        } else if b.sum > a.sum {
            b
        } else if a.row <= b.row {
            a
        } else {
            b
        }
    }
}

/// Reduce one contiguous block of `nrows` rows to its best row.
///
/// `block` is the row-major element buffer of the block (length
/// `nrows × ncols`) and `start_row` the global index of its first row, as
/// given by the partition plan. Row sums use plain left-to-right
/// accumulation so that every strategy reproduces the baseline bit for
/// bit. Ties within the block keep the first row (strict `>`).
///
/// An empty block (`nrows == 0`) yields [`MaxRow::SENTINEL`].
pub fn local_max_row(block: &[f64], nrows: usize, ncols: usize, start_row: usize) -> MaxRow {
    debug_assert_eq!(block.len(), nrows * ncols);

    let mut best = MaxRow::SENTINEL;
    for i in 0..nrows {
        let mut sum = 0.0;
        for &x in &block[i * ncols..(i + 1) * ncols] {
            sum += x;
        }
        if sum > best.sum {
            best = MaxRow {
                sum,
                row: start_row + i,
            };
        }
    }
    best
}

/// Sequential baseline: scan the whole matrix in one pass.
///
/// Returns `None` for a matrix with no rows (no valid row exists).
pub fn find_max_row(matrix: &Matrix) -> Option<MaxRow> {
    if matrix.nrows() == 0 {
        return None;
    }
    Some(local_max_row(
        matrix.as_slice(),
        matrix.nrows(),
        matrix.ncols(),
        0,
    ))
}
