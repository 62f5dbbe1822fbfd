//! Error types for the simulator client.

use thiserror::Error;

/// Errors returned by [`SimulatorClient`](crate::simulator::SimulatorClient) calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulatorError {
    /// The simulator task has stopped and no longer accepts requests.
    #[error("Simulator closed")]
    ActorClosed,

    /// The simulator stopped before answering.
    #[error("Simulator dropped response channel")]
    ActorDropped,
}
