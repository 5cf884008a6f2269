//! Message-passing worker group built on `std::sync::mpsc` channels.
//!
//! Each worker owns one mailbox and a sender handle to every peer; no
//! matrix data is shared. [`ChannelWorld::create`] wires the full mesh up
//! front, and the caller moves each [`ChannelGroup`] onto its own thread.
//!
//! Both collectives use a flat topology rooted at rank 0: the scatter is
//! point-to-point sends of each rank's block, the all-reduce a gather of
//! local results followed by a broadcast of the combined pair. Per-sender
//! FIFO ordering is what keeps iterations from bleeding into each other:
//! a worker cannot send its iteration-i result before receiving the
//! iteration-i block, and rank 0 cannot send the iteration-i+1 block
//! before finishing the iteration-i reduce, so every mailbox pops
//! messages in exactly the order the protocol expects.

use std::sync::mpsc::{channel, Receiver, Sender};

use rowmax_core::{Matrix, MaxRow, PartitionPlan};

use crate::group::{ComputeError, WorkerGroup};

/// Wire format between workers. The protocol is strictly alternating
/// (rows out, result back, result out), so one message enum per mailbox
/// is enough.
enum Message {
    Rows(Vec<f64>),
    Result(MaxRow),
}

/// One worker's endpoint in a channel-connected group.
pub struct ChannelGroup {
    rank: usize,
    peers: Vec<Sender<Message>>,
    inbox: Receiver<Message>,
}

/// Factory for fully-connected channel groups.
pub struct ChannelWorld;

impl ChannelWorld {
    /// Create `size` cross-connected worker endpoints. Rank 0 is the
    /// coordinator.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn create(size: usize) -> Vec<ChannelGroup> {
        assert!(size >= 1, "a worker group needs at least one rank");
        log::debug!("creating channel world with {size} workers");

        let (senders, inboxes): (Vec<_>, Vec<_>) = (0..size).map(|_| channel()).unzip();
        inboxes
            .into_iter()
            .enumerate()
            .map(|(rank, inbox)| ChannelGroup {
                rank,
                peers: senders.clone(),
                inbox,
            })
            .collect()
    }
}

impl ChannelGroup {
    fn send(&self, to: usize, msg: Message, phase: &'static str) -> Result<(), ComputeError> {
        self.peers[to]
            .send(msg)
            .map_err(|_| ComputeError::Disconnected { phase })
    }

    fn recv(&self, phase: &'static str) -> Result<Message, ComputeError> {
        self.inbox
            .recv()
            .map_err(|_| ComputeError::Disconnected { phase })
    }
}

impl WorkerGroup for ChannelGroup {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.peers.len()
    }

    fn scatter_rows(
        &mut self,
        source: Option<&Matrix>,
        plan: &PartitionPlan,
        block: &mut Vec<f64>,
    ) -> Result<(), ComputeError> {
        if plan.workers() != self.size() {
            return Err(ComputeError::PlanMismatch {
                plan: plan.workers(),
                group: self.size(),
            });
        }

        if self.is_coordinator() {
            let matrix = source.ok_or(ComputeError::MissingSource)?;
            if matrix.nrows() != plan.nrows() || matrix.ncols() != plan.ncols() {
                return Err(ComputeError::ShapeMismatch {
                    plan_rows: plan.nrows(),
                    plan_cols: plan.ncols(),
                    rows: matrix.nrows(),
                    cols: matrix.ncols(),
                });
            }
            let data = matrix.as_slice();
            for peer in 1..self.size() {
                let offset = plan.element_offset(peer);
                let chunk = data[offset..offset + plan.elements(peer)].to_vec();
                self.send(peer, Message::Rows(chunk), "scatter")?;
            }
            // Own block is a local copy; no message round-trip.
            block.clear();
            block.extend_from_slice(&data[..plan.elements(0)]);
        } else {
            match self.recv("scatter")? {
                Message::Rows(rows) => *block = rows,
                Message::Result(_) => return Err(ComputeError::Protocol { phase: "scatter" }),
            }
        }
        Ok(())
    }

    fn allreduce_max_row(&mut self, local: MaxRow) -> Result<MaxRow, ComputeError> {
        if self.is_coordinator() {
            let mut global = local;
            // Gather order does not matter: combine is associative and
            // commutative, and ties resolve by row index either way.
            for _ in 1..self.size() {
                match self.recv("reduce")? {
                    Message::Result(partial) => global = MaxRow::combine(global, partial),
                    Message::Rows(_) => return Err(ComputeError::Protocol { phase: "reduce" }),
                }
            }
            for peer in 1..self.size() {
                self.send(peer, Message::Result(global), "reduce")?;
            }
            Ok(global)
        } else {
            self.send(0, Message::Result(local), "reduce")?;
            match self.recv("reduce")? {
                Message::Result(global) => Ok(global),
                Message::Rows(_) => Err(ComputeError::Protocol { phase: "reduce" }),
            }
        }
    }
}
