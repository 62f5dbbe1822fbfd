//! # Live Mutation Simulator
//!
//! Keeps a bounded record collection evolving without any external input. On every
//! tick an order may arrive and an open order may be resolved; past the cap the
//! oldest orders are dropped.
//!
//! - [`apply_tick`]: the pure transition, copy-on-write over a slice
//! - [`SimulatorActor`] / [`SimulatorClient`]: the timer-driven task that owns the
//!   collection, and the handle used to read snapshots and stop it
//! - [`RandomSource`] and [`Clock`]: injected so tests control every draw and date
//!
//! See [`mock`] for scripted randomness in tests.

pub mod actor;
pub mod client;
pub mod clock;
pub mod error;
pub mod message;
pub mod mock;
pub mod random;
pub mod tick;

pub use actor::SimulatorActor;
pub use client::SimulatorClient;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SimulatorError;
pub use message::{Response, SimulatorRequest, Snapshot, TickReport};
pub use random::{RandomSource, SeededRandom};
pub use tick::{apply_tick, evict_oldest, next_id, TickOutcome};
