//! `aq-steering` — steering-force mathematics for the aquarium behavior core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`config`] | `SteeringConfig` — shared speed/force limits and sense radii  |
//! | [`forces`] | Pure desired-velocity functions and `compose_velocity`        |
//! | [`noise`]  | `LeakyNoise` — smoothly drifting wander direction             |
//! | [`error`]  | `SteeringError`, `SteeringResult<T>`                          |
//!
//! # Design notes
//!
//! Every function in [`forces`] is pure: given the same positions and
//! velocities it returns the same contribution, with no hidden state.  The
//! only stateful piece is [`LeakyNoise`], and even that draws exclusively
//! from the caller's own `FishRng`, so a brain's whole steering output is
//! reproducible from its seed.

pub mod config;
pub mod error;
pub mod forces;
pub mod noise;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SteeringConfig;
pub use error::{SteeringError, SteeringResult};
pub use forces::{align, avoid, cohere, compose_velocity, flee, seek, separate, wander};
pub use noise::LeakyNoise;
