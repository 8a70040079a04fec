use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which target the next request goes to.
pub trait TargetPicker: Send {
    /// Returns an index in `0..len`. Called once per request, with
    /// replacement, so consecutive picks may repeat.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random selection.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selection sequence for a given `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TargetPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
