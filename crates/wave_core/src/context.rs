//! Per-wave randomness and tunables.
//!
//! A [`WaveContext`] is built once per wave, handed to exactly one
//! [`SpawnPattern::build`](crate::pattern::SpawnPattern::build) call and then
//! dropped. It owns its random stream, so concurrent waves each need their
//! own context.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest value strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Random stream capability used by spawn patterns.
///
/// Any source able to produce these two draws can drive scheduling:
/// seeded streams in tests, entropy-backed streams in play.
pub trait WaveRng {
    /// Draw a uniformly distributed index in `[0, n)`. `n` is never zero.
    fn next_index(&mut self, n: usize) -> usize;

    /// Draw a uniformly distributed real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<T: WaveRng + ?Sized> WaveRng for Box<T> {
    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any [`rand::RngCore`] generator into a [`WaveRng`].
#[derive(Debug, Clone)]
pub struct RngStream<R>(R);

impl<R: RngCore> RngStream<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl RngStream<ChaCha8Rng> {
    /// ChaCha8 stream seeded from a `u64`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> WaveRng for RngStream<R> {
    fn next_index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Per-wave scheduling context.
pub struct WaveContext {
    rng: Box<dyn WaveRng>,
    elite_chance: f64,
}

impl WaveContext {
    /// Create a context around a random stream, with no elite upgrades.
    pub fn new(rng: impl WaveRng + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            elite_chance: 0.0,
        }
    }

    /// Create a context with a deterministic ChaCha8 stream.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngStream::seeded(seed))
    }

    /// Create a context seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RngStream::new(ChaCha8Rng::from_entropy()))
    }

    /// Set the probability that a spawn is upgraded to its elite variant.
    ///
    /// Clamped to `[0, 1]`; NaN disables upgrades.
    #[must_use]
    pub fn with_elite_chance(mut self, chance: f64) -> Self {
        self.elite_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }

    /// Probability of an elite upgrade per spawn.
    #[must_use]
    pub fn elite_chance(&self) -> f64 {
        self.elite_chance
    }

    /// Uniform index in `[0, n)`. Returns 0 when `n` is 0.
    pub fn draw_index(&mut self, n: usize) -> usize {
        if n <= 1 {
            // A single-unit pool still consumes one draw.
            if n == 1 {
                let _ = self.rng.next_index(1);
            }
            return 0;
        }
        self.rng.next_index(n).min(n - 1)
    }

    /// Uniform real in `[0, 1)`, clamped if the stream misbehaves.
    pub fn draw_unit(&mut self) -> f64 {
        let value = self.rng.next_unit();
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, BELOW_ONE)
    }

    /// Roll against the elite chance.
    pub fn roll_elite(&mut self) -> bool {
        self.draw_unit() < self.elite_chance
    }

    /// Multiplicative jitter drawn uniformly from `[min, max]`.
    pub fn jitter(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.draw_unit()
    }
}

impl std::fmt::Debug for WaveContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveContext")
            .field("elite_chance", &self.elite_chance)
            .finish_non_exhaustive()
    }
}
