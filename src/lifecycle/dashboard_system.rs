use crate::aggregation::DashboardSummary;
use crate::config::DashboardConfig;
use crate::lifecycle::DashboardError;
use crate::model::OrderRecord;
use crate::simulator::{Clock, RandomSource, SimulatorActor, SimulatorClient, SimulatorError, Snapshot};
use crate::source::RecordSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// One running dashboard session.
///
/// `DashboardSystem` is responsible for:
/// - **Loading**: pulling the initial collection from a [`RecordSource`]
/// - **Lifecycle Management**: spawning the simulator task and stopping it
/// - **Access**: exposing the simulator client for snapshots and summaries
///
/// # Example
///
/// ```ignore
/// let config = Arc::new(DashboardConfig::default());
/// let mut source = MockSource::new(config.statuses.clone(), config.history_days);
/// let mut system = DashboardSystem::start(config, &mut source).await?;
///
/// let summary = system.summary().await?;
///
/// system.stop().await?;
/// system.stop().await?; // no-op
/// ```
pub struct DashboardSystem {
    /// Client for the simulator task
    pub client: SimulatorClient,

    config: Arc<DashboardConfig>,

    /// `None` once the task has been stopped and awaited
    handle: Option<JoinHandle<()>>,
}

impl DashboardSystem {
    /// Validates `config`, loads the initial records from `source` and starts the
    /// simulator with default randomness and the system clock.
    ///
    /// Records that break an invariant are logged and kept: aggregation copes with
    /// them, and dropping them would hide data from the dashboard.
    pub async fn start(
        config: Arc<DashboardConfig>,
        source: &mut dyn RecordSource,
    ) -> Result<Self, DashboardError> {
        config.validate()?;
        let records = source.load().await?;
        info!(source = source.name(), count = records.len(), "Loaded initial records");
        report_violations(&records, &config);

        let (actor, client) = SimulatorActor::new(Arc::clone(&config), records);
        Ok(Self::spawn(actor, client, config))
    }

    /// Starts the simulator over `records` with injected randomness and clock.
    ///
    /// Must be called from within a Tokio runtime. Fails if `config` does not
    /// validate.
    pub fn with_parts(
        config: Arc<DashboardConfig>,
        records: Vec<OrderRecord>,
        rng: impl RandomSource + 'static,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DashboardError> {
        config.validate()?;
        report_violations(&records, &config);
        let (actor, client) = SimulatorActor::new(Arc::clone(&config), records);
        let actor = actor.with_random(rng).with_clock(clock);
        Ok(Self::spawn(actor, client, config))
    }

    fn spawn(actor: SimulatorActor, client: SimulatorClient, config: Arc<DashboardConfig>) -> Self {
        let handle = tokio::spawn(actor.run());
        Self {
            client,
            config,
            handle: Some(handle),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub async fn snapshot(&self) -> Result<Snapshot, SimulatorError> {
        self.client.snapshot().await
    }

    pub async fn summary(&self) -> Result<DashboardSummary, SimulatorError> {
        self.client.summary().await
    }

    /// Stops the simulator and waits for its task to finish.
    ///
    /// Calling this again after a successful stop does nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the task ended cleanly, now or earlier
    /// - `Err(DashboardError::TaskFailed)` if the task panicked
    pub async fn stop(&mut self) -> Result<(), DashboardError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        info!("Stopping dashboard...");

        // The task may already be gone; only the join result matters then.
        if let Err(e) = self.client.stop().await {
            warn!(error = %e, "Simulator already stopped");
        }

        if let Err(e) = handle.await {
            error!("Simulator task failed: {:?}", e);
            return Err(DashboardError::TaskFailed(e.to_string()));
        }

        info!("Dashboard stopped.");
        Ok(())
    }

    /// Stops the simulator and consumes the system.
    pub async fn shutdown(mut self) -> Result<(), DashboardError> {
        self.stop().await
    }
}

fn report_violations(records: &[OrderRecord], config: &DashboardConfig) {
    for record in records {
        if let Err(e) = record.check(&config.statuses) {
            warn!(id = record.id, error = %e, "Record violates invariant");
        }
    }
}
