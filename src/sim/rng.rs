//! Seeded random draws for platform placement
//!
//! A session owns exactly one `RandomBias`; nothing else in the simulation
//! consumes randomness, so a seed fully determines the platform layout.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// PCG32 wrapper with the uniform and biased draws used by platform placement
#[derive(Debug, Clone)]
pub struct RandomBias {
    seed: u64,
    rng: Pcg32,
}

impl RandomBias {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[min, max)`. An empty range yields `min`.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    /// Uniform draw in `[min, max)` pulled toward `bias`.
    ///
    /// The pull strength is itself random: a second draw in `[0, influence)`
    /// mixes the sample with `bias`. `influence = 0` is a plain uniform draw;
    /// `influence = 1` lets the mix range over the whole `[0, 1)`.
    pub fn biased(&mut self, min: f32, max: f32, bias: f32, influence: f32) -> f32 {
        let n = self.uniform(min, max);
        let mixer = self.uniform(0.0, 1.0) * influence;
        n * (1.0 - mixer) + bias * mixer
    }
}
