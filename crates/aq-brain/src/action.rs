//! The closed set of actions a fish can pursue in one tick.

/// What the brain decided to do this tick.  Exactly one is active per tick;
/// the choice is re-derived from scratch every update.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Swim toward the nearest food (or, when ravenous, toward prey).
    Eat,
    /// Break for the best-aligned shelter, or straight away from the predator.
    Hide,
    /// Align, cohere, and separate with nearby flock-mates.
    Flock,
    /// Play-chase the nearest similarly sized neighbor.
    Chase,
    /// Brake and drift.
    Idle,
    /// Wander on the smoothed noise direction.
    Explore,
}

impl Action {
    /// Every action, in the fixed order used for utility scoring.  The
    /// softmax draw consumes the stream relative to this order, so it must
    /// never change between runs.
    pub const ALL: [Action; 6] = [
        Action::Eat,
        Action::Hide,
        Action::Flock,
        Action::Chase,
        Action::Idle,
        Action::Explore,
    ];

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Eat     => "eat",
            Action::Hide    => "hide",
            Action::Flock   => "flock",
            Action::Chase   => "chase",
            Action::Idle    => "idle",
            Action::Explore => "explore",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
