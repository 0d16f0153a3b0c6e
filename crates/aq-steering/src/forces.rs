//! Pure desired-velocity functions and the force integrator.
//!
//! Each function returns a *desired-velocity contribution*; the brain
//! collects weighted contributions and funnels them all through
//! [`compose_velocity`], the single integrator that enforces the
//! `max_force`/`max_speed` clamps.

use aq_core::Vec2;

/// Floor for separation distances so coincident points cannot divide by zero.
const DISTANCE_EPSILON: f32 = 1e-5;

/// Desired velocity straight toward `target` at `max_speed`.
///
/// Returns `Vec2::ZERO` when already exactly at the target.
#[inline]
pub fn seek(pos: Vec2, target: Vec2, max_speed: f32) -> Vec2 {
    (target - pos).normalized() * max_speed
}

/// Desired velocity straight away from `threat` at `max_speed`.
#[inline]
pub fn flee(pos: Vec2, threat: Vec2, max_speed: f32) -> Vec2 {
    -seek(pos, threat, max_speed)
}

/// Velocity-matching contribution: average neighbor velocity minus own.
///
/// An empty neighbor set contributes nothing.
pub fn align(vel: Vec2, neighbor_velocities: &[Vec2]) -> Vec2 {
    if neighbor_velocities.is_empty() {
        return Vec2::ZERO;
    }
    let sum = neighbor_velocities
        .iter()
        .fold(Vec2::ZERO, |acc, &v| acc + v);
    sum * (1.0 / neighbor_velocities.len() as f32) - vel
}

/// Contribution toward the neighbor centroid at `max_speed`.
///
/// An empty neighbor set contributes nothing.
pub fn cohere(pos: Vec2, neighbor_positions: &[Vec2], max_speed: f32) -> Vec2 {
    if neighbor_positions.is_empty() {
        return Vec2::ZERO;
    }
    let sum = neighbor_positions
        .iter()
        .fold(Vec2::ZERO, |acc, &p| acc + p);
    let centroid = sum * (1.0 / neighbor_positions.len() as f32);
    (centroid - pos).normalized() * max_speed
}

/// Inverse-distance repulsion from every point strictly within `radius`.
///
/// Each point contributes its away-direction scaled by `1 / max(d, ε)`, so
/// closer points push harder.  Points at or beyond `radius` contribute
/// nothing; a point exactly coincident with `pos` has no defined away
/// direction and is skipped.
fn repel(pos: Vec2, points: &[Vec2], radius: f32) -> Vec2 {
    let mut force = Vec2::ZERO;
    for &p in points {
        let offset = pos - p;
        let dist = offset.length();
        if dist < radius {
            force = force + offset.normalized() * (1.0 / dist.max(DISTANCE_EPSILON));
        }
    }
    force
}

/// Separation pressure away from nearby flock-mates.
#[inline]
pub fn separate(pos: Vec2, neighbor_positions: &[Vec2], radius: f32) -> Vec2 {
    repel(pos, neighbor_positions, radius)
}

/// Repulsion away from nearby obstacle points — same law as [`separate`].
#[inline]
pub fn avoid(pos: Vec2, obstacles: &[Vec2], radius: f32) -> Vec2 {
    repel(pos, obstacles, radius)
}

/// Wander contribution: the smoothed noise direction, magnitude capped at
/// `max_speed`.
#[inline]
pub fn wander(noise: Vec2, max_speed: f32) -> Vec2 {
    noise.clamped(max_speed)
}

/// Integrate weighted contributions into a new velocity.
///
/// Sums each `(vector, weight)` pair into one steering force, clamps that
/// force to `max_force`, adds it to `current`, and clamps the result to
/// `max_speed`.  This is the only place velocity is produced, which is what
/// guarantees the speed invariant no matter how many contributions pile up.
pub fn compose_velocity(
    current: Vec2,
    components: &[(Vec2, f32)],
    max_speed: f32,
    max_force: f32,
) -> Vec2 {
    let mut force = Vec2::ZERO;
    for &(v, w) in components {
        force = force + v * w;
    }
    (current + force.clamped(max_force)).clamped(max_speed)
}
