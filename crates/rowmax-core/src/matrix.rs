//! Dense row-major matrix storage and deterministic generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A dense N×M matrix of `f64` values stored row-major in a flat buffer.
///
/// The flat layout is load-bearing: block-row distribution slices the
/// buffer at row boundaries (`row × ncols` element offsets) without any
/// repacking, so a worker's block is always a contiguous sub-slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Generate an `nrows × ncols` matrix with pseudo-random values in
    /// `[-100, 100)`, fully determined by `seed`.
    pub fn filled(nrows: usize, ncols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = (0..nrows * ncols)
            .map(|_| rng.gen_range(-100.0..100.0))
            .collect();
        Self { data, nrows, ncols }
    }

    /// Build a matrix from explicit rows. All rows must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            assert_eq!(row.len(), ncols, "ragged rows");
            data.extend_from_slice(row);
        }
        Self {
            data,
            nrows: rows.len(),
            ncols,
        }
    }

    /// Number of rows (N).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (M).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The flat row-major element buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// A single row as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}
