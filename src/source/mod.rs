//! # Order Record Source
//!
//! Where the initial collection comes from. The dashboard only needs a list of
//! records; [`RecordSource`] hides whether they were generated, read from a file or
//! handed over in memory.

pub mod error;
pub mod file;
pub mod mock;

pub use error::*;
pub use file::*;
pub use mock::*;

use crate::model::OrderRecord;
use async_trait::async_trait;

/// Supplies an ordered record collection, oldest first.
#[async_trait]
pub trait RecordSource: Send {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn load(&mut self) -> Result<Vec<OrderRecord>, SourceError>;
}

/// A collection that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<OrderRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn load(&mut self) -> Result<Vec<OrderRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
