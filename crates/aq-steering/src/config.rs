//! Shared steering limits and sensing radii.

use crate::{SteeringError, SteeringResult};

/// Physical limits and sensing radii shared read-only by all brains.
///
/// The simulation owns one instance; every `FishBrain` borrows it.  All
/// values are in screen cells (distances) and cells per second (speeds).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringConfig {
    /// Hard cap on velocity magnitude.
    pub max_speed: f32,

    /// Hard cap on the per-tick steering force magnitude.
    pub max_force: f32,

    /// Radius within which neighbors exert separation pressure (also the
    /// neighbor-sensing radius the brain passes to `WorldSense`).
    pub separation_radius: f32,

    /// Radius within which obstacle points exert repulsion.
    pub obstacle_radius: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.5,
            max_force: 1.5,
            separation_radius: 4.0,
            obstacle_radius: 6.0,
        }
    }
}

impl SteeringConfig {
    /// Reject non-positive or non-finite limits.
    ///
    /// Called once at brain construction; the per-tick path assumes a valid
    /// config and never re-checks.
    pub fn validate(&self) -> SteeringResult<()> {
        for (name, value) in [
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("separation_radius", self.separation_radius),
            ("obstacle_radius", self.obstacle_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SteeringError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
