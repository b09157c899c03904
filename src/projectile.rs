//! Knockback projectiles.
//!
//! A [`PushProjectile`] flies in a straight line, passes through walls, and
//! shoves the first body it touches before vanishing. Unhit projectiles expire
//! after their time to live.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LAUNCH_SPEED, DEFAULT_PROJECTILE_RADIUS, PROJECTILE_TIME_TO_LIVE, PUSH_MULTIPLIER,
};
use crate::geometry::Rect;
use crate::vector_math::heading_degrees;

/// Flight and impact tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Speed in units per second.
    pub launch_speed: f32,
    /// Seconds before an unhit projectile disappears.
    pub time_to_live: f32,
    /// Scale from projectile-to-target offset to impulse.
    pub push_multiplier: f32,
    /// Contact radius.
    pub radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            launch_speed: DEFAULT_LAUNCH_SPEED,
            time_to_live: PROJECTILE_TIME_TO_LIVE,
            push_multiplier: PUSH_MULTIPLIER,
            radius: DEFAULT_PROJECTILE_RADIUS,
        }
    }
}

/// A projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushProjectile {
    id: u64,
    owner: usize,
    position: Vec2,
    velocity: Vec2,
    heading_degrees: f32,
    spawned_at: f32,
    radius: f32,
    push_multiplier: f32,
}

impl PushProjectile {
    /// Launches projectile `id` for player `owner` from `origin`.
    ///
    /// `direction` is expected to be a unit vector; the projectile's speed is
    /// its length times the launch speed.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::projectile::{ProjectileTuning, PushProjectile};
    /// use glam::Vec2;
    /// let mut shot = PushProjectile::launch(0, 1, Vec2::ZERO, Vec2::X, &ProjectileTuning::default(), 0.0);
    /// shot.advance(0.5);
    /// assert!((shot.position().x - 5.0).abs() < 1e-5);
    /// ```
    #[must_use]
    pub fn launch(
        id: u64,
        owner: usize,
        origin: Vec2,
        direction: Vec2,
        tuning: &ProjectileTuning,
        now: f32,
    ) -> Self {
        Self {
            id,
            owner,
            position: origin,
            velocity: direction * tuning.launch_speed,
            heading_degrees: heading_degrees(direction),
            spawned_at: now,
            radius: tuning.radius,
            push_multiplier: tuning.push_multiplier,
        }
    }

    /// Match-unique identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Player that fired this projectile.
    #[must_use]
    pub const fn owner(&self) -> usize {
        self.owner
    }

    /// Current centre.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Constant flight velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Facing used to orient the sprite.
    #[must_use]
    pub const fn heading_degrees(&self) -> f32 {
        self.heading_degrees
    }

    /// Clock time of the launch.
    #[must_use]
    pub const fn spawned_at(&self) -> f32 {
        self.spawned_at
    }

    /// Moves the projectile along its velocity for `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Whether the projectile's contact circle overlaps `bounds`.
    #[must_use]
    pub fn touches(&self, bounds: &Rect) -> bool {
        let nearest = self.position.clamp(bounds.min, bounds.max);
        nearest.distance_squared(self.position) <= self.radius * self.radius
    }

    /// Knockback delivered to a body centred at `target`.
    #[must_use]
    pub fn impulse_towards(&self, target: Vec2) -> Vec2 {
        (target - self.position) * self.push_multiplier
    }
}
