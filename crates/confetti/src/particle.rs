//! Particle motion under gravity.
//!
//! A particle moves in 2D cell space with per-frame Euler integration:
//! velocity picks up gravity each step, position picks up velocity. Cell
//! space has `y` growing downward, so gravity is a positive `y`
//! acceleration.

use core::ops::{Add, AddAssign, Mul};

use tint::Color;

/// Returns a time delta for a given number of frames per second.
///
/// Use as the `delta_time` when stepping particles at a fixed frame rate.
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / f64::from(n)
}

/// Gravity acceleration in cells per second squared, tuned for terminal
/// cell aspect ratio.
pub const CELL_GRAVITY: Vec2 = Vec2::new(0.0, 18.0);

/// A 2D point or displacement in cell space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component, in cells.
    pub x: f64,
    /// Vertical component, in cells; positive is down.
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// A single confetti particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position.
    pub pos: Vec2,
    /// Current velocity in cells per second.
    pub vel: Vec2,
    /// Glyph drawn at the particle's cell.
    pub glyph: char,
    /// Color the glyph is drawn in.
    pub color: Color,
}

impl Particle {
    /// Creates a particle at `pos` with initial velocity `vel`.
    pub fn new(pos: Vec2, vel: Vec2, glyph: char, color: Color) -> Self {
        Self {
            pos,
            vel,
            glyph,
            color,
        }
    }

    /// Advances the particle by one time step under `gravity`.
    pub fn step(&mut self, delta_time: f64, gravity: Vec2) {
        self.vel += gravity * delta_time;
        self.pos += self.vel * delta_time;
    }
}
