//! Balanced block-row partition of a matrix across a worker group.
//!
//! The plan is pure arithmetic over `(nrows, ncols, workers)`, so every
//! worker recomputes it locally from those three numbers instead of
//! receiving it from the coordinator. All ranks therefore agree on row
//! ownership and global row offsets without any communication.

/// Assignment of contiguous row blocks to worker ranks.
///
/// With `N = q·P + r`, ranks `0..r` receive `q + 1` rows and the rest
/// receive `q`. The ordering matters: global row indices are reconstructed
/// from cumulative counts, so the scatter must hand out blocks in exactly
/// this rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    nrows: usize,
    ncols: usize,
    workers: usize,
}

impl PartitionPlan {
    /// Plan a partition of an `nrows × ncols` matrix across `workers` ranks.
    ///
    /// `workers` must be at least 1. `nrows < workers` is valid and leaves
    /// the trailing ranks with zero rows.
    pub fn new(nrows: usize, ncols: usize, workers: usize) -> Self {
        assert!(workers >= 1, "a partition needs at least one worker");
        Self {
            nrows,
            ncols,
            workers,
        }
    }

    /// Total number of matrix rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns per row.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of worker ranks the plan covers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of rows assigned to `rank`.
    pub fn rows(&self, rank: usize) -> usize {
        let q = self.nrows / self.workers;
        let r = self.nrows % self.workers;
        q + usize::from(rank < r)
    }

    /// Global index of the first row assigned to `rank`.
    pub fn start_row(&self, rank: usize) -> usize {
        let q = self.nrows / self.workers;
        let r = self.nrows % self.workers;
        rank * q + rank.min(r)
    }

    /// Number of flat-buffer elements in `rank`'s block.
    pub fn elements(&self, rank: usize) -> usize {
        self.rows(rank) * self.ncols
    }

    /// Offset of `rank`'s block into the flat row-major buffer.
    pub fn element_offset(&self, rank: usize) -> usize {
        self.start_row(rank) * self.ncols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_all_rows() {
        for nrows in [0, 1, 2, 7, 64, 101] {
            for workers in [1, 2, 3, 7, 16] {
                let plan = PartitionPlan::new(nrows, 3, workers);
                let total: usize = (0..workers).map(|p| plan.rows(p)).sum();
                assert_eq!(total, nrows, "N={nrows} P={workers}");
            }
        }
    }

    #[test]
    fn counts_differ_by_at_most_one() {
        for nrows in [1, 5, 9, 100] {
            for workers in [1, 2, 4, 7] {
                let plan = PartitionPlan::new(nrows, 1, workers);
                let counts: Vec<_> = (0..workers).map(|p| plan.rows(p)).collect();
                let max = counts.iter().max().unwrap();
                let min = counts.iter().min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn remainder_goes_to_leading_ranks() {
        // N = 10, P = 4 → 3, 3, 2, 2
        let plan = PartitionPlan::new(10, 2, 4);
        assert_eq!(plan.rows(0), 3);
        assert_eq!(plan.rows(1), 3);
        assert_eq!(plan.rows(2), 2);
        assert_eq!(plan.rows(3), 2);
    }

    #[test]
    fn start_rows_are_cumulative_counts() {
        let plan = PartitionPlan::new(11, 3, 4);
        let mut expected = 0;
        for rank in 0..4 {
            assert_eq!(plan.start_row(rank), expected);
            expected += plan.rows(rank);
        }
        assert_eq!(expected, 11);
    }

    #[test]
    fn element_layout_follows_rows() {
        let plan = PartitionPlan::new(5, 3, 2);
        assert_eq!(plan.elements(0), 9); // 3 rows × 3 cols
        assert_eq!(plan.elements(1), 6);
        assert_eq!(plan.element_offset(0), 0);
        assert_eq!(plan.element_offset(1), 9);
    }

    #[test]
    fn more_workers_than_rows_leaves_empty_blocks() {
        let plan = PartitionPlan::new(2, 4, 5);
        assert_eq!(plan.rows(0), 1);
        assert_eq!(plan.rows(1), 1);
        assert_eq!(plan.rows(2), 0);
        assert_eq!(plan.rows(4), 0);
        assert_eq!(plan.start_row(3), 2);
        assert_eq!(plan.elements(3), 0);
    }
}
