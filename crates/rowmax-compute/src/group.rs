//! Worker group trait and error types.
//!
//! A [`WorkerGroup`] is one worker's handle on a fixed set of peers
//! executing the same program. The two collectives it exposes are the
//! whole coordination surface of the distributed algorithm: a scatter
//! keyed by the partition plan and a value+index all-reduce. Both are
//! synchronous; a call returns only once its collective semantics hold
//! for this worker. Every rank must call them at matching points, the
//! same number of times, or the group stalls.

use rowmax_core::{Matrix, MaxRow, PartitionPlan};
use thiserror::Error;

/// Errors from worker-group collectives.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("coordinator (rank 0) must supply the source matrix")]
    MissingSource,

    #[error("partition plan covers {plan} workers but the group has {group}")]
    PlanMismatch { plan: usize, group: usize },

    #[error("partition plan is for a {plan_rows}x{plan_cols} matrix but the source is {rows}x{cols}")]
    ShapeMismatch {
        plan_rows: usize,
        plan_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("worker group disconnected during {phase}")]
    Disconnected { phase: &'static str },

    #[error("unexpected message during {phase}")]
    Protocol { phase: &'static str },

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// One worker's view of a collective group.
///
/// Exactly one rank (0 by convention) is the coordinator and the only
/// worker permitted to own the full matrix; the others hold derived row
/// blocks that are refreshed by each scatter. The combine applied by the
/// all-reduce is [`MaxRow::combine`], independent of the transport.
pub trait WorkerGroup {
    /// This worker's rank in `0..size()`.
    fn rank(&self) -> usize;

    /// Total number of workers in the group.
    fn size(&self) -> usize;

    /// Whether this worker is the coordinator.
    fn is_coordinator(&self) -> bool {
        self.rank() == 0
    }

    /// Collective scatter: distribute each rank's row block per `plan`.
    ///
    /// The coordinator passes `Some(matrix)`; every other rank passes
    /// `None`. On return `block` holds exactly this rank's rows (possibly
    /// zero of them), overwriting whatever the buffer held before. The
    /// buffer is reused across iterations.
    fn scatter_rows(
        &mut self,
        source: Option<&Matrix>,
        plan: &PartitionPlan,
        block: &mut Vec<f64>,
    ) -> Result<(), ComputeError>;

    /// Collective all-reduce of one [`MaxRow`] per worker.
    ///
    /// Blocks until every rank has contributed, then returns the identical
    /// combined pair on every rank.
    fn allreduce_max_row(&mut self, local: MaxRow) -> Result<MaxRow, ComputeError>;
}
