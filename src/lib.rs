//! # Service Dashboard
//!
//! > **Status counts, wait times and daily trends for service orders, kept live by a simulator.**
//!
//! This crate is the data core of a service-order dashboard. It turns a flat list of
//! order records into the figures the dashboard renders, and runs a timer-driven
//! simulator that keeps a bounded in-memory collection evolving for demos.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure aggregations, one writer
//!
//! - **Aggregations** are plain functions over `&[OrderRecord]`. They never mutate
//!   their input and never fail; bad data is excluded, not raised.
//! - **The simulator** is a single Tokio task that owns the collection. It processes
//!   ticks and requests sequentially, so no locks are needed, and it publishes each
//!   new collection as an immutable `Arc` snapshot.
//!
//! ### Derived, never stored
//!
//! A record stores its status `code` only. Labels and colours come from the
//! [`StatusCatalog`](model::StatusCatalog) when read, so they cannot drift apart.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`OrderRecord`](model::OrderRecord), [`StatusCatalog`](model::StatusCatalog).
//!
//! ### 2. The Knobs ([`config`])
//! - **Role**: catalog, collection cap, tick interval, probabilities, series order; loadable from YAML.
//! - **Key items**: [`DashboardConfig`](config::DashboardConfig).
//!
//! ### 3. The Inputs ([`source`])
//! - **Role**: where the initial collection comes from (mock history, JSON file, memory).
//! - **Key items**: [`RecordSource`](source::RecordSource), [`MockSource`](source::MockSource).
//!
//! ### 4. The Figures ([`aggregation`])
//! - **Key items**: [`status_counts`](aggregation::status_counts),
//!   [`daily_series`](aggregation::daily_series),
//!   [`average_wait_days`](aggregation::average_wait_days),
//!   [`submissions_between`](aggregation::submissions_between),
//!   [`DashboardSummary`](aggregation::DashboardSummary).
//!
//! ### 5. The Engine ([`simulator`])
//! - **Role**: the pure tick transition and the task that applies it on a timer.
//! - **Key items**: [`apply_tick`](simulator::apply_tick), [`SimulatorActor`](simulator::SimulatorActor),
//!   [`SimulatorClient`](simulator::SimulatorClient).
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! - **Role**: load, spawn, stop; tracing setup.
//! - **Key items**: [`DashboardSystem`](lifecycle::DashboardSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with per-tick logs
//! RUST_LOG=debug cargo run
//!
//! # Use a custom configuration and a recorded collection
//! DASHBOARD_CONFIG=dashboard.yaml DASHBOARD_RECORDS=orders.json cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod aggregation;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod simulator;
pub mod source;
