//! `aq-core` — foundational types for the aquarium agent behavior core.
//!
//! This crate is a dependency of every other `aq-*` crate.  It intentionally
//! has no `aq-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `FishId`                                   |
//! | [`vec2`]  | `Vec2` — 2-D vector arithmetic             |
//! | [`rng`]   | `FishRng` (per-agent deterministic stream) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::FishId;
pub use rng::FishRng;
pub use vec2::Vec2;
