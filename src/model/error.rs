//! Error types for record validation.

use thiserror::Error;

/// Invariant violations found by [`OrderRecord::check`](crate::model::OrderRecord::check).
///
/// These are reported, never raised by the aggregations: a record that fails a
/// check is still counted wherever its fields allow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The status code is not in the catalog.
    #[error("Order {id}: unknown status code {code}")]
    UnknownCode { id: u64, code: u16 },

    /// A date field is present but is not a valid `YYYY-MM-DD` date.
    #[error("Order {id}: malformed {field} {value:?}")]
    MalformedDate {
        id: u64,
        field: &'static str,
        value: String,
    },

    /// `waitingForParts` disagrees with the status code.
    #[error("Order {id}: waiting-for-parts flag does not match code {code}")]
    PartsFlagMismatch { id: u64, code: u16 },

    /// A finish date on a non-terminal order, or a terminal order without one.
    #[error("Order {id}: finish date does not match code {code}")]
    FinishMismatch { id: u64, code: u16 },

    /// A submission date on a non-submitted order, or a submitted order without one.
    #[error("Order {id}: submission date does not match code {code}")]
    SubmissionMismatch { id: u64, code: u16 },

    /// The order finished before it was created.
    #[error("Order {id}: finished before it was created")]
    FinishedBeforeCreated { id: u64 },
}
