//! Lateral wind for a single step: either the configured base speed or a fresh uniform draw.
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Bound on the magnitude of randomised wind.
pub const DYNAMIC_WIND_LIMIT: f64 = 1.0;

pub trait WindModel {
    /// Wind acceleration for the coming step.
    ///
    /// With `dynamic` unset this must return `base_speed` unchanged.
    fn sample(&mut self, dynamic: bool, base_speed: f64) -> f64;
}

/// Wind backed by an injected random source.
#[derive(Debug, Clone)]
pub struct RandomWind<R> {
    rng: R,
}

impl<R: Rng> RandomWind<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWind<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        //! reproducible wind; two runs with the same seed see the same gusts.
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WindModel for RandomWind<R> {
    fn sample(&mut self, dynamic: bool, base_speed: f64) -> f64 {
        if dynamic {
            self.rng.gen_range(-DYNAMIC_WIND_LIMIT..=DYNAMIC_WIND_LIMIT)
        } else {
            base_speed
        }
    }
}
