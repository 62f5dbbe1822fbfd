//! Error types for the dashboard lifecycle.

use crate::config::ConfigError;
use crate::simulator::SimulatorError;
use crate::source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    /// The simulator task panicked or was cancelled.
    #[error("Simulator task failed: {0}")]
    TaskFailed(String),
}
