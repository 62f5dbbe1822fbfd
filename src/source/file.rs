use crate::model::OrderRecord;
use crate::source::{RecordSource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Reads a JSON array of records, as exported by an order backend.
///
/// Fields use the wire names (`createdDate`, `waitingForParts`, ...). A stored
/// `status` label is ignored; labels always come from the catalog.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&mut self) -> Result<Vec<OrderRecord>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let records: Vec<OrderRecord> = serde_json::from_str(&content)?;
        debug!(count = records.len(), "Loaded records");
        Ok(records)
    }
}
