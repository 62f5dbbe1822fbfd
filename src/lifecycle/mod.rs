//! # Dashboard Lifecycle
//!
//! Wires the pieces together for one dashboard session: load the initial records
//! from a [`RecordSource`](crate::source::RecordSource), start the simulator task,
//! hand out its client, and stop it cleanly at the end.
//!
//! The simulator's timer is owned by the [`DashboardSystem`], not by the process.
//! Dropping the system drops its client, which ends the task; calling
//! [`DashboardSystem::stop`] does the same and waits for it. `stop` may be called
//! any number of times.

pub mod dashboard_system;
pub mod error;
pub mod tracing;

pub use dashboard_system::*;
pub use error::*;
pub use self::tracing::setup_tracing;
