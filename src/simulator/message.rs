//! # Simulator Messages
//!
//! Requests sent from [`SimulatorClient`](crate::simulator::SimulatorClient) to the
//! [`SimulatorActor`](crate::simulator::SimulatorActor). Each carries a one-shot
//! channel for the answer.

use crate::aggregation::DashboardSummary;
use crate::model::OrderRecord;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the simulator.
pub type Response<T> = oneshot::Sender<T>;

/// Immutable view of the collection at one point in time.
pub type Snapshot = Arc<Vec<OrderRecord>>;

/// What one tick did, without the records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub arrived: Option<u64>,
    pub resolved: Option<u64>,
    pub evicted: usize,
    /// Collection size after the tick.
    pub size: usize,
}

#[derive(Debug)]
pub enum SimulatorRequest {
    /// Read the current collection.
    Snapshot { respond_to: Response<Snapshot> },
    /// Run every aggregation over the current collection.
    Summary { respond_to: Response<DashboardSummary> },
    /// Run one tick immediately, outside the timer.
    Tick { respond_to: Response<TickReport> },
    /// Swap in an externally supplied collection. Answers with the number of
    /// records evicted to respect the cap.
    Replace {
        records: Vec<OrderRecord>,
        respond_to: Response<usize>,
    },
    /// Stop the timer and end the task.
    Stop { respond_to: Response<()> },
}
