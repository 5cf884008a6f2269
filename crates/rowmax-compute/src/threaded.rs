//! Shared-memory parallel scan using Rayon.
//!
//! The contrast case to the message-passing group: every thread reads the
//! same matrix, so there is nothing to distribute and the whole strategy
//! is a parallel loop folded with the same [`MaxRow::combine`] the
//! distributed reducer uses.

use rayon::prelude::*;
use rowmax_core::{Matrix, MaxRow};

use crate::group::ComputeError;

/// Parallel max-row scanner with a dedicated thread pool.
pub struct ThreadedScanner {
    pool: rayon::ThreadPool,
}

impl ThreadedScanner {
    /// Create a scanner with `threads` worker threads; 0 lets Rayon pick
    /// one per available core.
    pub fn new(threads: usize) -> Result<Self, ComputeError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| ComputeError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Actual number of threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Find the maximum-sum row. Same semantics as the sequential
    /// baseline, including first-occurrence tie-break and `None` for a
    /// rowless matrix.
    pub fn find_max_row(&self, matrix: &Matrix) -> Option<MaxRow> {
        if matrix.nrows() == 0 {
            return None;
        }
        let ncols = matrix.ncols();
        if ncols == 0 {
            // Every row sums to zero; the first one wins.
            return Some(MaxRow { sum: 0.0, row: 0 });
        }

        let best = self.pool.install(|| {
            matrix
                .as_slice()
                .par_chunks(ncols)
                .enumerate()
                .map(|(row, elems)| MaxRow {
                    sum: elems.iter().sum(),
                    row,
                })
                .reduce(|| MaxRow::SENTINEL, MaxRow::combine)
        });
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmax_core::reduce::find_max_row;

    #[test]
    fn matches_sequential_baseline() {
        let matrix = Matrix::filled(101, 13, 42);
        let scanner = ThreadedScanner::new(4).unwrap();
        assert_eq!(scanner.find_max_row(&matrix), find_max_row(&matrix));
    }

    #[test]
    fn tie_break_is_deterministic_across_threads() {
        // Three identical best rows; the reduce tree may combine them in
        // any order but must keep row 1.
        let matrix = Matrix::from_rows(&[
            vec![0.0, 0.0],
            vec![3.0, 3.0],
            vec![3.0, 3.0],
            vec![3.0, 3.0],
            vec![-1.0, 0.0],
        ]);
        let scanner = ThreadedScanner::new(3).unwrap();
        let best = scanner.find_max_row(&matrix).unwrap();
        assert_eq!(best.row, 1);
        assert_eq!(best.sum, 6.0);
    }

    #[test]
    fn empty_matrix_has_no_result() {
        let scanner = ThreadedScanner::new(2).unwrap();
        assert!(scanner.find_max_row(&Matrix::filled(0, 8, 1)).is_none());
    }

    #[test]
    fn default_thread_count_uses_all_cores() {
        let scanner = ThreadedScanner::new(0).unwrap();
        assert!(scanner.threads() >= 1);
    }
}
