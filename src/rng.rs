//! Injectable randomness for gameplay draws (food placement).
//!
//! Layout noise never goes through here; it is a pure function of grid
//! coordinates (see `procgen::noise`).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of independent uniform draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1]`.
    fn next_unit(&mut self) -> f32;
}

/// Seeded ChaCha stream; the same seed replays the same food sequence.
#[derive(Debug, Clone)]
pub struct ChaChaSource(ChaCha8Rng);

impl ChaChaSource {
    pub fn new(seed: u64) -> Self {
        ChaChaSource(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for ChaChaSource {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}
