//! # Scripted Randomness
//!
//! Test utility that replays a fixed sequence of draws, so a test can state exactly
//! which transitions a tick performs.
//!
//! ```rust
//! use service_dashboard::simulator::mock::ScriptedRandom;
//! use service_dashboard::simulator::RandomSource;
//!
//! // first roll fires, second misses; the only index drawn is 2
//! let mut rng = ScriptedRandom::new([0.1, 0.9], [2]);
//! assert!(rng.chance(0.5));
//! assert_eq!(rng.index(3), 2);
//! assert!(!rng.chance(0.4));
//! assert!(rng.is_exhausted());
//! ```

use crate::simulator::RandomSource;
use std::collections::VecDeque;

/// A [`RandomSource`] that hands out pre-recorded values.
///
/// Unit draws and index draws come from separate queues. Running out of either,
/// or scripting an index that is out of range, panics: the test expected fewer
/// draws than the code made.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(units: impl IntoIterator<Item = f64>, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }

    /// Appends one tick's worth of draws.
    pub fn push_tick(&mut self, units: impl IntoIterator<Item = f64>, indices: impl IntoIterator<Item = usize>) {
        self.units.extend(units);
        self.indices.extend(indices);
    }

    /// True once every scripted value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.indices.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.units
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedRandom: no unit draw left"))
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self
            .indices
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedRandom: no index draw left"));
        assert!(value < len, "ScriptedRandom: index {value} out of range 0..{len}");
        value
    }
}
