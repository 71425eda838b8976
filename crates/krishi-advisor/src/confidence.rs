//! Heuristic confidence values and the jitter source behind them.
//!
//! Several engines report a "confidence" that is a fixed base plus a bounded
//! random offset. These numbers are display values, not probabilities: they
//! do not depend on how good the input is. The randomness is injected
//! through [`JitterSource`] so tests can pin it.
//!
//! - [`RngJitter`] -- wraps any [`rand::Rng`]; seeded or OS-entropy backed
//! - [`FixedJitter`] -- always returns the same unit value

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)` used to jitter confidences.
pub trait JitterSource {
    /// Draw the next value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// [`JitterSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    /// Deterministic jitter: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Jitter seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// [`JitterSource`] that always yields the same value.
///
/// The value is clamped into `[0, 1)` at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Largest value strictly below one.
    const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

    /// Jitter pinned to `value`, clamped into `[0, 1)`. NaN pins to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX_UNIT))
    }

    /// Jitter that always returns zero, so confidences sit at their base.
    pub const fn zero() -> Self {
        Self(0.0)
    }
}

impl JitterSource for FixedJitter {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// `base + U(0, span)` where `U` comes from `jitter`.
pub fn jittered(base: f64, span: f64, jitter: &mut impl JitterSource) -> f64 {
    span.mul_add(jitter.unit(), base)
}

/// Round to one decimal place, the precision shown on the dashboard.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
