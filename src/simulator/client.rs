//! # Simulator Client
//!
//! Cloneable handle for talking to a running [`SimulatorActor`](crate::simulator::SimulatorActor).

use crate::aggregation::DashboardSummary;
use crate::model::OrderRecord;
use crate::simulator::{SimulatorError, SimulatorRequest, Snapshot, TickReport};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// The simulator task ends once every client is dropped, so holding a client keeps
/// the timer alive.
#[derive(Clone)]
pub struct SimulatorClient {
    sender: mpsc::Sender<SimulatorRequest>,
}

impl SimulatorClient {
    pub fn new(sender: mpsc::Sender<SimulatorRequest>) -> Self {
        Self { sender }
    }

    /// Current collection. The returned snapshot never changes; later ticks
    /// produce new snapshots.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Snapshot, SimulatorError> {
        debug!("Sending request");
        self.request(|respond_to| SimulatorRequest::Snapshot { respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DashboardSummary, SimulatorError> {
        debug!("Sending request");
        self.request(|respond_to| SimulatorRequest::Summary { respond_to }).await
    }

    /// Runs one tick now, in addition to the timer's ticks.
    #[instrument(skip(self))]
    pub async fn tick_now(&self) -> Result<TickReport, SimulatorError> {
        debug!("Sending request");
        self.request(|respond_to| SimulatorRequest::Tick { respond_to }).await
    }

    /// Replaces the collection. Returns how many of the oldest records were
    /// dropped to stay within the cap.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn replace(&self, records: Vec<OrderRecord>) -> Result<usize, SimulatorError> {
        debug!("Sending request");
        self.request(|respond_to| SimulatorRequest::Replace { records, respond_to }).await
    }

    /// Asks the task to stop. Fails with [`SimulatorError::ActorClosed`] if it
    /// already has.
    #[instrument(skip(self))]
    pub async fn stop(&self) -> Result<(), SimulatorError> {
        debug!("Sending request");
        self.request(|respond_to| SimulatorRequest::Stop { respond_to }).await
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SimulatorRequest,
    ) -> Result<T, SimulatorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SimulatorError::ActorClosed)?;
        response.await.map_err(|_| SimulatorError::ActorDropped)
    }
}
