//! Sources of the random jitter applied to utilization and temperature.

use rand::Rng;

/// Something that can hand out a uniformly distributed sample in `[low, high)`.
pub trait RandomSource {
    fn next_uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Adapts any [`rand::Rng`] (thread RNG, seeded `StdRng`, ...).
pub struct RngJitter<R>(pub R);

impl RngJitter<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngJitter<R> {
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            low
        } else {
            self.0.gen_range(low..high)
        }
    }
}

/// Always returns the same offset, clamped into the requested range.
/// `ConstantJitter(0.0)` turns the estimator fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantJitter(pub f64);

impl RandomSource for ConstantJitter {
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.0.max(low).min(high)
    }
}
