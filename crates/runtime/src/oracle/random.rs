use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use battle_core::RandomSource;

/// [`RandomSource`] backed by the `rand` crate's standard generator.
#[derive(Clone, Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Reproducible stream for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded stream when `seed` is set, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
