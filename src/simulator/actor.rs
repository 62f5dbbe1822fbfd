//! # Simulator Actor
//!
//! This module defines the `SimulatorActor`, the task that owns the live record
//! collection. It is the only writer: timer ticks and client requests are handled
//! one at a time in a single loop, so the collection needs no lock.
//!
//! Readers never see a half-applied tick. The collection lives behind an `Arc`;
//! every tick builds a new `Vec` and swaps the `Arc`, and snapshots handed out
//! earlier keep pointing at the old one.

use crate::aggregation::DashboardSummary;
use crate::config::DashboardConfig;
use crate::model::OrderRecord;
use crate::simulator::{
    apply_tick, evict_oldest, Clock, RandomSource, SeededRandom, SimulatorClient, SimulatorRequest,
    Snapshot, SystemClock, TickReport,
};
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// The server half of the simulator.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SimulatorActor::new()` returns the actor and its client.
/// 2.  **Customise**: optionally inject randomness and a clock for tests.
/// 3.  **Run**: spawn `actor.run()` on the Tokio runtime.
///
/// ```rust
/// use service_dashboard::config::DashboardConfig;
/// use service_dashboard::simulator::{SeededRandom, SimulatorActor};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let config = Arc::new(DashboardConfig::default());
///     let (actor, client) = SimulatorActor::new(config, Vec::new());
///     let handle = tokio::spawn(actor.with_random(SeededRandom::seeded(7)).run());
///
///     let report = client.tick_now().await.unwrap();
///     assert!(report.size <= 1);
///
///     client.stop().await.unwrap();
///     handle.await.unwrap();
/// }
/// ```
pub struct SimulatorActor {
    receiver: mpsc::Receiver<SimulatorRequest>,
    config: Arc<DashboardConfig>,
    records: Snapshot,
    rng: Box<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    ticks: u64,
}

impl SimulatorActor {
    /// Creates the actor around an initial collection, plus a client for it.
    ///
    /// The initial collection is trimmed to the configured cap, oldest first.
    /// Randomness defaults to an entropy-seeded generator and the clock to UTC.
    pub fn new(config: Arc<DashboardConfig>, mut records: Vec<OrderRecord>) -> (Self, SimulatorClient) {
        let (sender, receiver) = mpsc::channel(config.simulator.channel_capacity);
        let evicted = evict_oldest(&mut records, config.simulator.max_records);
        if evicted > 0 {
            warn!(evicted, max = config.simulator.max_records, "Initial collection over cap");
        }
        let actor = Self {
            receiver,
            config,
            records: Arc::new(records),
            rng: Box::new(SeededRandom::from_entropy()),
            clock: Arc::new(SystemClock),
            ticks: 0,
        };
        (actor, SimulatorClient::new(sender))
    }

    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the timer and the request loop until a stop request arrives or every
    /// client is dropped. The timer is owned by this future and goes away with it.
    pub async fn run(mut self) {
        let period = self.config.simulator.tick_interval();
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(size = self.records.len(), period_ms = period.as_millis() as u64, "Simulator started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick();
                }
                msg = self.receiver.recv() => match msg {
                    Some(request) => {
                        if self.handle(request).is_break() {
                            break;
                        }
                    }
                    None => {
                        debug!("All clients dropped");
                        break;
                    }
                },
            }
        }

        info!(ticks = self.ticks, size = self.records.len(), "Simulator shutdown");
    }

    /// Answers one request. Breaks only on `Stop`, after replying.
    fn handle(&mut self, request: SimulatorRequest) -> ControlFlow<()> {
        match request {
            SimulatorRequest::Snapshot { respond_to } => {
                debug!(size = self.records.len(), "Snapshot");
                let _ = respond_to.send(Arc::clone(&self.records));
            }
            SimulatorRequest::Summary { respond_to } => {
                let today = self.clock.today();
                debug!(size = self.records.len(), %today, "Summary");
                let _ = respond_to.send(DashboardSummary::compute(&self.records, &self.config, today));
            }
            SimulatorRequest::Tick { respond_to } => {
                let _ = respond_to.send(self.tick());
            }
            SimulatorRequest::Replace { mut records, respond_to } => {
                let evicted = evict_oldest(&mut records, self.config.simulator.max_records);
                self.records = Arc::new(records);
                info!(size = self.records.len(), evicted, "Replaced");
                let _ = respond_to.send(evicted);
            }
            SimulatorRequest::Stop { respond_to } => {
                debug!("Stop requested");
                let _ = respond_to.send(());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn tick(&mut self) -> TickReport {
        let today = self.clock.today();
        let outcome = apply_tick(
            &self.records,
            &self.config.statuses,
            &self.config.simulator,
            self.rng.as_mut(),
            today,
        );
        self.ticks += 1;

        let report = TickReport {
            arrived: outcome.arrived,
            resolved: outcome.resolved,
            evicted: outcome.evicted,
            size: outcome.records.len(),
        };
        if outcome.changed() {
            self.records = Arc::new(outcome.records);
        }
        debug!(
            tick = self.ticks,
            arrived = ?report.arrived,
            resolved = ?report.resolved,
            evicted = report.evicted,
            size = report.size,
            "Tick"
        );
        report
    }
}
