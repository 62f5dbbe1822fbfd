//! Dashboard configuration.
//!
//! Every knob that changes behaviour lives here so tests can adjust it: the status
//! catalog, the collection cap, the simulator's tick interval and probabilities, and
//! the ordering of the daily series. All fields have defaults matching the
//! production dashboard, so an empty YAML document is a valid configuration.
//!
//! ```yaml
//! series_order: chronological
//! history_days: 14
//! simulator:
//!   max_records: 200
//!   tick_interval_ms: 2000
//!   arrival_probability: 0.5
//!   resolution_probability: 0.4
//! ```

pub mod error;

pub use error::*;

use crate::aggregation::SeriesOrder;
use crate::model::{StatusCatalog, StatusRole};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Settings for the live mutation simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Upper bound on the collection; the oldest records are dropped past it.
    pub max_records: usize,
    /// Period between ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Chance per tick that a new order arrives.
    pub arrival_probability: f64,
    /// Chance per tick that one open order is resolved.
    pub resolution_probability: f64,
    /// Capacity of the simulator's request channel.
    pub channel_capacity: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_records: 200,
            tick_interval_ms: 2000,
            arrival_probability: 0.5,
            resolution_probability: 0.4,
            channel_capacity: 32,
        }
    }
}

impl SimulatorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// A configuration whose ticks never change anything.
    pub fn frozen() -> Self {
        Self {
            arrival_probability: 0.0,
            resolution_probability: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub statuses: StatusCatalog,
    pub series_order: SeriesOrder,
    /// Days of history the mock source generates, today included.
    pub history_days: u32,
    pub simulator: SimulatorConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            statuses: StatusCatalog::default(),
            series_order: SeriesOrder::default(),
            history_days: 14,
            simulator: SimulatorConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file and validate it.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulator;
        for (name, p) in [
            ("arrival_probability", sim.arrival_probability),
            ("resolution_probability", sim.resolution_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!("{name} must be within [0, 1], got {p}")));
            }
        }
        if sim.max_records == 0 {
            return Err(ConfigError::Invalid("max_records must be positive".into()));
        }
        if sim.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if sim.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be positive".into()));
        }
        self.validate_catalog()
    }

    fn validate_catalog(&self) -> Result<(), ConfigError> {
        let entries = self.statuses.entries();
        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for entry in entries {
            if !codes.insert(entry.code) {
                return Err(ConfigError::Invalid(format!("duplicate status code {}", entry.code)));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate status name {:?}", entry.name)));
            }
        }
        for role in [
            StatusRole::New,
            StatusRole::WaitingForParts,
            StatusRole::Resolved,
            StatusRole::Submitted,
        ] {
            match entries.iter().filter(|e| e.role == role).count() {
                1 => {}
                0 => return Err(ConfigError::Invalid(format!("no status with role {role}"))),
                _ => return Err(ConfigError::Invalid(format!("more than one status with role {role}"))),
            }
        }
        Ok(())
    }
}
