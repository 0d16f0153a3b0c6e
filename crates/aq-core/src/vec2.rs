//! Minimal 2-D vector value type.
//!
//! `Vec2` uses `f32` components — positions and velocities are measured in
//! screen cells, where single precision is far beyond what a terminal grid
//! can resolve.

use std::ops::{Add, Mul, Neg, Sub};

/// Threshold below which a squared length is treated as zero.
const LENGTH_SQ_EPSILON: f32 = 1e-12;

/// An immutable 2-D vector with value semantics.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `Vec2::ZERO` when the magnitude
    /// is (near) zero.  Never divides by zero, never produces NaN.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len_sq = self.length_sq();
        if len_sq <= LENGTH_SQ_EPSILON {
            return Vec2::ZERO;
        }
        self * (1.0 / len_sq.sqrt())
    }

    /// Same direction, magnitude limited to `max_len`.
    #[inline]
    pub fn clamped(self, max_len: f32) -> Vec2 {
        let len_sq = self.length_sq();
        if len_sq <= max_len * max_len {
            return self;
        }
        self * (max_len / len_sq.sqrt())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
