//! Temperature-scaled softmax sampling over named action scores.

use aq_core::FishRng;

use crate::{Action, BrainError, BrainResult};

/// Turns a set of action scores into one stochastic choice.
///
/// Scores are carried in a fixed-order slice rather than a map: the sampler
/// makes a single cumulative draw from the fish's stream, so a
/// nondeterministic iteration order would desynchronize every later draw on
/// that stream.
#[derive(Clone, Debug)]
pub struct UtilitySelector {
    temperature: f32,
}

impl UtilitySelector {
    /// Build with a sampling temperature.  Higher temperature flattens the
    /// distribution; `temperature -> 0` approaches argmax.  Non-positive or
    /// non-finite values fail fast.
    pub fn new(temperature: f32) -> BrainResult<Self> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(BrainError::Config(format!(
                "softmax temperature must be positive and finite, got {temperature}"
            )));
        }
        Ok(Self { temperature })
    }

    #[inline]
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Softmax probabilities for each entry, in the input order.
    ///
    /// Numerically stabilized by subtracting the max score before
    /// exponentiating, so large or very negative scores cannot overflow.
    /// Equal scores (including all zero) yield a uniform distribution.
    pub fn probabilities(&self, utilities: &[(Action, f32)]) -> Vec<f32> {
        let max = utilities
            .iter()
            .map(|&(_, score)| score)
            .fold(f32::NEG_INFINITY, f32::max);
        let weights: Vec<f32> = utilities
            .iter()
            .map(|&(_, score)| ((score - max) / self.temperature).exp())
            .collect();
        let total: f32 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect()
    }

    /// Sample one action against the cumulative softmax distribution.
    ///
    /// Returns the chosen action and its probability.  `utilities` must be
    /// non-empty (the brain always passes all six actions).
    pub fn softmax_choice(
        &self,
        utilities: &[(Action, f32)],
        rng: &mut FishRng,
    ) -> (Action, f32) {
        debug_assert!(!utilities.is_empty(), "softmax over an empty utility set");
        let probs = self.probabilities(utilities);
        let mut draw = rng.gen_range(0.0f32..1.0);
        for (&(action, _), &p) in utilities.iter().zip(&probs) {
            draw -= p;
            if draw <= 0.0 {
                return (action, p);
            }
        }
        // Rounding can leave a sliver of probability past the last bucket.
        let last = utilities.len() - 1;
        (utilities[last].0, probs[last])
    }
}
