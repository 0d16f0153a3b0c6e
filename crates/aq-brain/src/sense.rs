//! The `WorldSense` trait — the sensing boundary between brain and world.

use aq_core::{FishId, Vec2};

/// One sensed flock-mate: `(id, position, velocity)`.
pub type Neighbor = (FishId, Vec2, Vec2);

/// The sensing capability the simulation world must provide.
///
/// The behavior core only *consumes* this interface; it never implements it.
/// All queries are keyed by the asking fish's id except [`shelters`] and
/// [`bounds`][Self::bounds], which are world-global.
///
/// # Absence signalling
///
/// "Nothing in range" is a normal, frequent condition, not an error:
/// directional queries answer `(Vec2::ZERO, f32::INFINITY)`, set queries
/// answer an empty `Vec`.  The drive formulas in `FishBrain` tend to zero on
/// these sentinels naturally, so no special-casing is needed anywhere.
///
/// # Optional capabilities
///
/// [`nearest_prey`][Self::nearest_prey] and [`size_of`][Self::size_of] have
/// default implementations returning `None`, so worlds without those
/// capabilities implement nothing extra.  `None` must never stall a tick:
/// the brain substitutes absence (or the default size class) and carries on.
///
/// # Snapshot consistency
///
/// Within one tick, every brain must observe the same pre-tick positions and
/// velocities, or flocking and chasing become dependent on agent iteration
/// order.  Sense for all fish before applying any returned velocity.
///
/// [`shelters`]: Self::shelters
pub trait WorldSense {
    /// Unit direction toward the nearest food and its distance.
    /// `(Vec2::ZERO, f32::INFINITY)` when no food exists.
    fn nearest_food(&self, id: FishId) -> (Vec2, f32);

    /// Unit direction toward the nearest predator and its distance.
    /// `(Vec2::ZERO, f32::INFINITY)` when no predator threatens.
    fn predator_vector(&self, id: FishId) -> (Vec2, f32);

    /// All flock-mates within `radius` of the asking fish.
    fn neighbors(&self, id: FishId, radius: f32) -> Vec<Neighbor>;

    /// Positions of obstacle points within `radius` of the asking fish.
    fn obstacles(&self, id: FishId, radius: f32) -> Vec<Vec2>;

    /// Positions of every shelter in the habitat (world-global).
    fn shelters(&self) -> Vec<Vec2>;

    /// Habitat dimensions as `(width, height)` in cells.
    fn bounds(&self) -> (u32, u32);

    /// Unit direction toward the nearest huntable smaller fish and its
    /// distance.  Optional capability: the default answers `None`, meaning
    /// unsupported or nothing in range.
    fn nearest_prey(&self, _id: FishId) -> Option<(Vec2, f32)> {
        None
    }

    /// Size class of a fish.  Optional capability: the default answers
    /// `None`, and callers fall back to the default size class.
    fn size_of(&self, _id: FishId) -> Option<u8> {
        None
    }
}
