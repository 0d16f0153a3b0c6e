//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each fish gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (fish_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive fish IDs uniformly across the seed space.
//! This means:
//!
//! - Fish never share RNG state, so a run is reproducible regardless of the
//!   order in which brains are updated within a tick.
//! - Adding or removing fish does not disturb the streams of existing fish.
//! - All stochastic draws in the behavior core (softmax sampling, wander
//!   noise) flow through this type; there is no module-level randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{FishId, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-fish deterministic RNG.
///
/// Create one per fish when the brain is constructed; the brain owns it
/// exclusively for the agent's lifetime.
pub struct FishRng(SmallRng);

impl FishRng {
    /// Seed deterministically from the run's global seed and a fish ID.
    pub fn new(global_seed: u64, fish: FishId) -> Self {
        let seed = global_seed ^ (fish.0 as u64).wrapping_mul(MIXING_CONSTANT);
        FishRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A fresh direction sample with both components uniform in [-1, 1].
    ///
    /// This is the raw input of the leaky wander noise; its magnitude is
    /// deliberately not normalized so the smoothed state can ebb as well as
    /// turn.
    #[inline]
    pub fn unit_sample(&mut self) -> Vec2 {
        Vec2::new(self.0.gen_range(-1.0..=1.0), self.0.gen_range(-1.0..=1.0))
    }
}
