//! # Service Dashboard Demo
//!
//! Starts a dashboard session, lets the simulator tick for a while, and logs the
//! resulting summary as JSON.
//!
//! Environment:
//! - `DASHBOARD_CONFIG`: YAML configuration file (defaults apply when unset)
//! - `DASHBOARD_RECORDS`: JSON array of records (a generated history when unset)
//! - `DASHBOARD_TICKS`: number of tick intervals to run (default 5)

use service_dashboard::config::DashboardConfig;
use service_dashboard::lifecycle::{setup_tracing, DashboardError, DashboardSystem};
use service_dashboard::source::{JsonFileSource, MockSource, RecordSource};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    setup_tracing();

    let config = match std::env::var("DASHBOARD_CONFIG") {
        Ok(path) => DashboardConfig::from_yaml_file(&path)?,
        Err(_) => DashboardConfig::default(),
    };
    let config = Arc::new(config);

    let mut source: Box<dyn RecordSource> = match std::env::var("DASHBOARD_RECORDS") {
        Ok(path) => Box::new(JsonFileSource::new(path)),
        Err(_) => Box::new(MockSource::new(config.statuses.clone(), config.history_days)),
    };

    let ticks: u32 = std::env::var("DASHBOARD_TICKS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(5);

    info!(
        ticks,
        interval_ms = config.simulator.tick_interval_ms,
        max_records = config.simulator.max_records,
        "Starting dashboard"
    );

    let mut system = DashboardSystem::start(Arc::clone(&config), source.as_mut()).await?;

    let span = tracing::info_span!("live_updates");
    async {
        for _ in 0..ticks {
            tokio::time::sleep(config.simulator.tick_interval()).await;
            let summary = system.summary().await?;
            info!(
                size = summary.total_records,
                average_wait_days = summary.average_wait_days,
                last_month_submissions = summary.last_month_submissions,
                "Refreshed"
            );
        }
        Ok::<_, DashboardError>(())
    }
    .instrument(span)
    .await?;

    let summary = system.summary().await?;
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => info!("Dashboard summary:\n{json}"),
        Err(e) => warn!(error = %e, "Cannot serialize summary"),
    }

    system.shutdown().await?;

    info!("Dashboard demo completed");
    Ok(())
}
