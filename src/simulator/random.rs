//! Injectable randomness for the simulator and the mock source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The only way the simulator draws random numbers.
///
/// Production code uses [`SeededRandom`]; tests pass a
/// [`ScriptedRandom`](crate::simulator::mock::ScriptedRandom) to pin every draw.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform draw in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// True with probability `p`. `p <= 0` never fires and `p >= 1` always does.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// [`RandomSource`] backed by `rand`'s `StdRng`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
