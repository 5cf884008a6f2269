//! # Rowmax Core
//!
//! Problem-domain primitives for the max-row-sum benchmark: given a dense
//! N×M matrix, find the row whose elements sum to the maximum value.
//!
//! The crate is deliberately transport-agnostic. It defines the data the
//! execution strategies in `rowmax-compute` move around and the pure
//! operations they apply, but knows nothing about threads, channels, or
//! worker ranks beyond the numbers in a [`partition::PartitionPlan`].
//!
//! ## Modules
//!
//! - [`matrix`] — Row-major dense matrix with deterministic seeded fill.
//! - [`partition`] — Balanced block-row partition across a worker group.
//! - [`reduce`] — Row-sum reduction: local block scan, the associative
//!   value+index combine, and the sequential baseline.

pub mod matrix;
pub mod partition;
pub mod reduce;

pub use matrix::Matrix;
pub use partition::PartitionPlan;
pub use reduce::MaxRow;
