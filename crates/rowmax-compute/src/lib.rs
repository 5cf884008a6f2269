//! # Rowmax Compute
//!
//! Execution strategies for the max-row-sum problem. This crate provides a
//! [`WorkerGroup`](group::WorkerGroup) trait that isolates the reduction
//! algorithm from how workers actually exchange data.
//!
//! ## Available strategies
//!
//! | Strategy | Module | Model |
//! |----------|--------|-------|
//! | Message passing | [`channel`] | One thread per worker, mailboxes only |
//! | Shared memory | [`threaded`] | Rayon parallel scan |
//!
//! The sequential baseline lives in `rowmax-core` and needs no group.

pub mod channel;
pub mod group;
pub mod threaded;

pub use channel::{ChannelGroup, ChannelWorld};
pub use group::{ComputeError, WorkerGroup};
pub use threaded::ThreadedScanner;
