//! # Aggregation Engine
//!
//! Pure functions that turn a flat list of [`OrderRecord`](crate::model::OrderRecord)s
//! into the figures the dashboard shows. None of them mutate their input and none of
//! them fail: unknown status codes and unusable dates exclude a record from the
//! affected figure and nothing else.
//!
//! - [`status_counts`]: orders per status, every catalog status present
//! - [`daily_series`]: orders per day for one status
//! - [`average_wait_days`]: mean days from creation to finish
//! - [`submissions_between`]: submissions inside an inclusive date window
//!
//! [`DashboardSummary`] evaluates all of them over one snapshot.

pub mod counts;
pub mod daily;
pub mod summary;
pub mod wait;
pub mod window;

pub use counts::*;
pub use daily::*;
pub use summary::*;
pub use wait::*;
pub use window::*;
