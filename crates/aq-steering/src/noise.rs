//! Leaky-integrator wander noise.
//!
//! A raw uniform sample every tick makes agents jitter; running the samples
//! through a leaky integrator produces a direction that drifts smoothly
//! instead.  The leak rate is derived from a time constant `tau`:
//!
//!   alpha = 1 / clamp(tau, 1e-3, 5.0)
//!   state = (1 - alpha) * state + alpha * sample
//!
//! Larger `tau` means slower drift.

use aq_core::{FishRng, Vec2};

use crate::{SteeringError, SteeringResult};

/// Clamp bounds applied to `tau` before deriving the leak rate.
const TAU_MIN: f32 = 1e-3;
const TAU_MAX: f32 = 5.0;

/// Stateful generator of a smoothly drifting 2-D wander direction.
///
/// Owns no RNG of its own: every `step` draws from the caller's `FishRng`,
/// so the output is reproducible given the same stream and call sequence.
#[derive(Clone, Debug)]
pub struct LeakyNoise {
    state: Vec2,
    alpha: f32,
}

impl LeakyNoise {
    /// Build from a time constant.  Non-positive or non-finite `tau` is a
    /// construction-time contract violation and fails fast.
    pub fn new(tau: f32) -> SteeringResult<Self> {
        if !tau.is_finite() || tau <= 0.0 {
            return Err(SteeringError::Config(format!(
                "wander tau must be positive and finite, got {tau}"
            )));
        }
        Ok(Self {
            state: Vec2::ZERO,
            alpha: 1.0 / tau.clamp(TAU_MIN, TAU_MAX),
        })
    }

    /// Blend a fresh sample into the state and return the updated direction.
    pub fn step(&mut self, rng: &mut FishRng) -> Vec2 {
        let sample = rng.unit_sample();
        self.state = self.state * (1.0 - self.alpha) + sample * self.alpha;
        self.state
    }

    /// The effective leak rate after clamping.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
