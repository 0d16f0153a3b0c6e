//! `aq-brain` — the per-fish decision engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`action`]  | `Action` enum — the closed set of drives a fish can act on     |
//! | [`sense`]   | `WorldSense` trait — the sensing boundary the world implements |
//! | [`utility`] | `UtilitySelector` — temperature-scaled softmax sampling        |
//! | [`brain`]   | `FishBrain`, `BrainConfig`, `Personality`, `IntegrationLimits` |
//! | [`error`]   | `BrainError`, `BrainResult<T>`                                 |
//!
//! # Design notes
//!
//! The tick contract is a single call: the simulation loop invokes
//! [`FishBrain::update`] once per fish per tick with the pre-tick position
//! and velocity, and gets the new velocity back.  All reads go through the
//! fish's borrowed [`WorldSense`]; the brain mutates only its own state
//! (hunger, last action, cooldown, noise).  For flocking to stay
//! iteration-order independent, the world must answer every brain's queries
//! from the same pre-tick snapshot — sense everything before applying any
//! returned velocity.
//!
//! There is no persistent mode: the action is re-derived from the current
//! drives every tick, so a fish never stays stuck in a behavior after its
//! utility has faded.

pub mod action;
pub mod brain;
pub mod error;
pub mod sense;
pub mod utility;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use brain::{BrainConfig, FishBrain, IntegrationLimits, Personality};
pub use error::{BrainError, BrainResult};
pub use sense::{Neighbor, WorldSense};
pub use utility::UtilitySelector;
