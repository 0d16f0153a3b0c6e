//! The stateful per-fish decision engine.
//!
//! One [`FishBrain`] per fish, constructed when the agent enters the
//! simulation and dropped when the world removes it.  Each tick the brain
//! senses through its borrowed [`WorldSense`], scores the competing drives,
//! samples an action, composes weighted steering contributions, and returns
//! a new clamped velocity.  The only state that persists between ticks is
//! the continuous hunger scalar, the last chosen action, the turn cooldown,
//! and the noise integrator — the action itself is re-derived every update.

use aq_core::{FishId, FishRng, Vec2};
use aq_steering::{
    LeakyNoise, SteeringConfig, align, avoid, cohere, compose_velocity, flee, seek, separate,
    wander,
};

use crate::{Action, BrainResult, Neighbor, UtilitySelector, WorldSense};

// ── Drive constants ───────────────────────────────────────────────────────────

/// Distance falloff of the food pull: `1 / (1 + 0.35 d)`.
const FOOD_FALLOFF: f32 = 0.35;
/// Distance falloff of fear: `1 / (1 + 0.35 d)`.
const FEAR_FALLOFF: f32 = 0.35;
/// Neighbor count at which the social drive saturates.
const CROWD_SATURATION: f32 = 8.0;
/// Assumed size class when the world cannot answer `size_of`.
const DEFAULT_SIZE_CLASS: u8 = 3;
/// Food further than this counts as absent for the hunting check.
const FOOD_ABSENT_DISTANCE: f32 = 9999.0;
/// A fish only play-chases peers within this size-class difference.
const CHASE_SIZE_TOLERANCE: u8 = 1;

// ── Behavior weights ──────────────────────────────────────────────────────────

/// Obstacle-avoidance weight added while hiding.
const HIDE_AVOID_WEIGHT: f32 = 0.7;
/// Wander weight when a chase finds no eligible peer.
const CHASE_FALLBACK_WANDER_WEIGHT: f32 = 0.3;
/// Braking weight while idling.
const IDLE_BRAKE_WEIGHT: f32 = 0.6;
/// Residual wander while idling, so idle never becomes perfect stasis.
const IDLE_WANDER_WEIGHT: f32 = 0.1;
/// Wander weight while exploring.
const EXPLORE_WANDER_WEIGHT: f32 = 0.5;
/// Exploring wanders at this fraction of the configured max speed.
const EXPLORE_SPEED_FRACTION: f32 = 0.7;

// ── Hunger dynamics ───────────────────────────────────────────────────────────

/// Hunger accumulated per simulated second.
const HUNGER_RATE: f32 = 0.03;
/// Hunger relieved by one successful bite.
const EAT_RELIEF: f32 = 0.5;
/// A bite lands only when the food is closer than this.
const EAT_RANGE: f32 = 1.2;

// ── Personality ───────────────────────────────────────────────────────────────

/// Per-fish multipliers on the four drive signals.
///
/// Defaults to 1.0 everywhere.  No upper bound is enforced; a value of zero
/// or below leaves that drive inert.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub hunger: f32,
    pub fear: f32,
    pub social: f32,
    pub curiosity: f32,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            hunger: 1.0,
            fear: 1.0,
            social: 1.0,
            curiosity: 1.0,
        }
    }
}

// ── Integration limits ────────────────────────────────────────────────────────

/// Scale factors applied to `max_speed`/`max_force` at integration time.
///
/// Two tunings exist in the wild and both are preserved as named presets
/// rather than folded into one guess: [`SMOOTHED`][Self::SMOOTHED] trades a
/// little top speed for visually smoother motion and is the default;
/// [`DIRECT`][Self::DIRECT] integrates at the configured limits unchanged.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationLimits {
    pub speed_scale: f32,
    pub force_scale: f32,
}

impl IntegrationLimits {
    /// 0.9× speed, 0.85× force — the smoother-motion tuning.
    pub const SMOOTHED: IntegrationLimits = IntegrationLimits {
        speed_scale: 0.9,
        force_scale: 0.85,
    };

    /// Configured limits applied as-is.
    pub const DIRECT: IntegrationLimits = IntegrationLimits {
        speed_scale: 1.0,
        force_scale: 1.0,
    };
}

impl Default for IntegrationLimits {
    fn default() -> Self {
        IntegrationLimits::SMOOTHED
    }
}

// ── BrainConfig ───────────────────────────────────────────────────────────────

/// Tunable gains of one brain.
///
/// `util_temp` and `wander_tau` are validated at construction; the gains are
/// free-form multipliers and accept any value.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrainConfig {
    /// Softmax sampling temperature.  Must be positive and finite.
    pub util_temp: f32,
    /// Time constant of the wander noise.  Must be positive and finite.
    pub wander_tau: f32,

    /// Multiplier on the eat utility and the seek-food steering weight.
    pub eat_gain: f32,
    /// Multiplier on the hide utility and the shelter/flee steering weight.
    pub hide_gain: f32,
    /// Multiplier on the chase utility and the chase steering weight.
    pub chase_gain: f32,
    /// Multiplier on the idle utility.
    pub idle_gain: f32,

    /// Flocking weights.
    pub flock_alignment: f32,
    pub flock_cohesion: f32,
    pub flock_separation: f32,

    /// Always-on separation weight, regardless of the chosen action.
    pub baseline_separation: f32,
    /// Always-on obstacle-avoidance weight.
    pub baseline_avoid: f32,

    /// Hunger level at which a fish starts considering smaller fish as food.
    pub hunt_threshold: f32,

    /// Speed/force scaling applied at integration time.
    pub limits: IntegrationLimits,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            util_temp: 0.6,
            wander_tau: 1.2,
            eat_gain: 1.2,
            hide_gain: 1.5,
            chase_gain: 1.0,
            idle_gain: 0.8,
            flock_alignment: 0.8,
            flock_cohesion: 0.5,
            flock_separation: 1.2,
            baseline_separation: 0.6,
            baseline_avoid: 0.9,
            hunt_threshold: 0.8,
            limits: IntegrationLimits::SMOOTHED,
        }
    }
}

// ── FishBrain ─────────────────────────────────────────────────────────────────

/// The decision engine of one fish.
///
/// Borrows the shared world and steering limits; exclusively owns its random
/// stream, noise integrator, and selector, so two brains never contend and a
/// run is reproducible from `(global seed, fish id)` alone.
pub struct FishBrain<'w, S: WorldSense> {
    id: FishId,
    rng: FishRng,
    sense: &'w S,
    steering: &'w SteeringConfig,
    config: BrainConfig,
    personality: Personality,

    // Mutable per-tick state.
    hunger: f32,
    last_action: Option<Action>,
    turn_cooldown: f32,
    noise: LeakyNoise,
    selector: UtilitySelector,
}

impl<'w, S: WorldSense> FishBrain<'w, S> {
    /// Build a brain bound to `id` with its own independent random stream.
    ///
    /// Fails fast on invalid configuration (non-positive temperature, tau,
    /// or steering limits); per-tick updates are infallible afterwards.
    pub fn new(
        id: FishId,
        rng: FishRng,
        sense: &'w S,
        steering: &'w SteeringConfig,
        config: BrainConfig,
        personality: Personality,
    ) -> BrainResult<Self> {
        steering.validate()?;
        let noise = LeakyNoise::new(config.wander_tau)?;
        let selector = UtilitySelector::new(config.util_temp)?;
        Ok(Self {
            id,
            rng,
            sense,
            steering,
            config,
            personality,
            hunger: 0.0,
            last_action: None,
            turn_cooldown: 0.0,
            noise,
            selector,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> FishId {
        self.id
    }

    /// Current hunger, always in [0, 1].
    #[inline]
    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    /// Overwrite hunger, clamped into [0, 1].  Used by the embedding
    /// simulation when spawning fish in varied states or force-feeding.
    pub fn set_hunger(&mut self, hunger: f32) {
        self.hunger = hunger.clamp(0.0, 1.0);
    }

    /// The action chosen on the most recent update, for higher-level
    /// policies (e.g. deciding when a sprite may flip).
    #[inline]
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Seconds left before the turning policy may request another turn.
    /// Decremented by every update; this core never consumes it otherwise.
    #[inline]
    pub fn turn_cooldown(&self) -> f32 {
        self.turn_cooldown
    }

    /// Arm the turn cooldown.
    pub fn set_turn_cooldown(&mut self, secs: f32) {
        self.turn_cooldown = secs.max(0.0);
    }

    // ── The tick ──────────────────────────────────────────────────────────

    /// Run one decision tick and return the new velocity.
    ///
    /// `pos` and `vel` are the fish's pre-tick position and velocity; the
    /// caller integrates the returned velocity into position.  See the crate
    /// docs for the snapshot-consistency requirement on [`WorldSense`].
    pub fn update(&mut self, dt: f32, pos: Vec2, vel: Vec2) -> Vec2 {
        // Sense.  A very hungry fish with no food in sight considers prey
        // instead; the substitution lasts only for this tick and a world
        // without the capability simply answers None.
        let (mut dir_food, mut dist_food) = self.sense.nearest_food(self.id);
        let (dir_pred, dist_pred) = self.sense.predator_vector(self.id);
        if self.hunger >= self.config.hunt_threshold && dist_food > FOOD_ABSENT_DISTANCE {
            if let Some((dir_prey, dist_prey)) = self.sense.nearest_prey(self.id) {
                if dist_prey.is_finite() {
                    dir_food = dir_prey;
                    dist_food = dist_prey;
                }
            }
        }
        let neighbors = self.sense.neighbors(self.id, self.steering.separation_radius);
        let obstacles = self.sense.obstacles(self.id, self.steering.obstacle_radius);

        // Score the drives.  Absent senses arrive as infinite distances and
        // drive the pulls to zero on their own.
        let raw_food = 1.0 / (1.0 + FOOD_FALLOFF * dist_food);
        let raw_fear = 1.0 / (1.0 + FEAR_FALLOFF * dist_pred);
        let raw_social = (neighbors.len() as f32 / CROWD_SATURATION).clamp(0.0, 1.0);
        let raw_curiosity = 1.0 - 0.5 * raw_social;

        let size = self.sense.size_of(self.id).unwrap_or(DEFAULT_SIZE_CLASS);
        let size_scale = (0.25 + 0.2 * (f32::from(size) - 1.0)).min(1.0);
        let idle_pull =
            (size_scale * (1.0 - 0.6 * self.hunger) * (1.0 - 0.7 * raw_fear)).max(0.0);
        let chase_pull =
            (0.6 * raw_social + 0.4 * raw_curiosity).max(0.0) * (1.0 - 0.5 * raw_fear);

        let food_pull = raw_food * self.personality.hunger;
        let fear = raw_fear * self.personality.fear;
        let social = raw_social * self.personality.social;
        let curiosity = raw_curiosity * self.personality.curiosity;

        let utilities = [
            (Action::Eat, food_pull * self.config.eat_gain),
            (Action::Hide, fear * self.config.hide_gain),
            (Action::Flock, social),
            (Action::Chase, chase_pull * self.config.chase_gain),
            (Action::Idle, idle_pull * self.config.idle_gain),
            (Action::Explore, curiosity),
        ];
        let (action, _) = self.selector.softmax_choice(&utilities, &mut self.rng);
        self.last_action = Some(action);

        // Compose the steering contributions for the chosen action.
        let neighbor_positions: Vec<Vec2> = neighbors.iter().map(|&(_, p, _)| p).collect();
        let neighbor_velocities: Vec<Vec2> = neighbors.iter().map(|&(_, _, v)| v).collect();
        let max_speed = self.steering.max_speed;
        let mut components: Vec<(Vec2, f32)> = Vec::with_capacity(5);
        match action {
            Action::Eat => {
                if dist_food.is_finite() {
                    components.push((seek(pos, pos + dir_food, max_speed), self.config.eat_gain));
                }
            }
            Action::Hide => {
                if dist_pred.is_finite() {
                    let away = -dir_pred;
                    match self.best_shelter(pos, away) {
                        Some(shelter) => components
                            .push((seek(pos, shelter, max_speed), self.config.hide_gain)),
                        None => components
                            .push((flee(pos, pos + dir_pred, max_speed), self.config.hide_gain)),
                    }
                }
                components.push((
                    avoid(pos, &obstacles, self.steering.obstacle_radius),
                    HIDE_AVOID_WEIGHT,
                ));
            }
            Action::Flock => {
                components.push((
                    align(vel, &neighbor_velocities),
                    self.config.flock_alignment,
                ));
                components.push((
                    cohere(pos, &neighbor_positions, max_speed),
                    self.config.flock_cohesion,
                ));
                components.push((
                    separate(pos, &neighbor_positions, self.steering.separation_radius),
                    self.config.flock_separation,
                ));
            }
            Action::Chase => match self.chase_target(pos, &neighbors) {
                Some(target) => {
                    components.push((seek(pos, target, max_speed), self.config.chase_gain));
                }
                None => {
                    let n = self.noise.step(&mut self.rng);
                    components.push((wander(n, max_speed), CHASE_FALLBACK_WANDER_WEIGHT));
                }
            },
            Action::Idle => {
                components.push((-vel, IDLE_BRAKE_WEIGHT));
                let n = self.noise.step(&mut self.rng);
                components.push((wander(n, max_speed), IDLE_WANDER_WEIGHT));
            }
            Action::Explore => {
                let n = self.noise.step(&mut self.rng);
                components.push((
                    wander(n, EXPLORE_SPEED_FRACTION * max_speed),
                    EXPLORE_WANDER_WEIGHT,
                ));
            }
        }
        // Baselines always on: crowd separation and obstacle avoidance.
        components.push((
            separate(pos, &neighbor_positions, self.steering.separation_radius),
            self.config.baseline_separation,
        ));
        components.push((
            avoid(pos, &obstacles, self.steering.obstacle_radius),
            self.config.baseline_avoid,
        ));

        let limits = self.config.limits;
        let new_vel = compose_velocity(
            vel,
            &components,
            max_speed * limits.speed_scale,
            self.steering.max_force * limits.force_scale,
        );

        // Hunger dynamics and timers.
        let bite = action == Action::Eat && dist_food < EAT_RANGE;
        let relief = if bite { EAT_RELIEF } else { 0.0 };
        self.hunger = (self.hunger + HUNGER_RATE * dt - relief).clamp(0.0, 1.0);
        self.turn_cooldown = (self.turn_cooldown - dt).max(0.0);

        new_vel
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// The shelter whose direction best aligns with `away` (the direction
    /// pointing away from the predator).  Ties keep the first encountered;
    /// `None` when the world has no shelters.
    pub(crate) fn best_shelter(&self, pos: Vec2, away: Vec2) -> Option<Vec2> {
        let mut best: Option<(Vec2, f32)> = None;
        for shelter in self.sense.shelters() {
            let alignment = (shelter - pos).normalized().dot(away);
            match best {
                Some((_, score)) if alignment <= score => {}
                _ => best = Some((shelter, alignment)),
            }
        }
        best.map(|(shelter, _)| shelter)
    }

    /// Position of the nearest neighbor whose size class is within
    /// [`CHASE_SIZE_TOLERANCE`] of this fish's own; `None` when no peer
    /// qualifies.  Unknown sizes fall back to the default class.
    pub(crate) fn chase_target(&self, pos: Vec2, neighbors: &[Neighbor]) -> Option<Vec2> {
        let own = self.sense.size_of(self.id).unwrap_or(DEFAULT_SIZE_CLASS);
        let mut best: Option<(Vec2, f32)> = None;
        for &(other, other_pos, _) in neighbors {
            let size = self.sense.size_of(other).unwrap_or(DEFAULT_SIZE_CLASS);
            if own.abs_diff(size) > CHASE_SIZE_TOLERANCE {
                continue;
            }
            let dist = pos.distance(other_pos);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((other_pos, dist));
            }
        }
        best.map(|(target, _)| target)
    }
}
