//! Destructible walls.

use serde::{Deserialize, Serialize};

use crate::body::Damageable;
use crate::constants::DEFAULT_WALL_HIT_POINTS;
use crate::geometry::Rect;

/// A blocking rectangle that players can chop down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Footprint.
    pub bounds: Rect,
    /// Remaining hit points; the wall stops blocking at zero.
    #[serde(default = "default_hit_points")]
    pub hit_points: i32,
}

const fn default_hit_points() -> i32 {
    DEFAULT_WALL_HIT_POINTS
}

impl Wall {
    /// Creates a wall with the default hit points.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            hit_points: DEFAULT_WALL_HIT_POINTS,
        }
    }

    /// Whether the wall has been knocked down.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.hit_points <= 0
    }
}

impl Damageable for Wall {
    fn take_damage(&mut self, amount: i32) {
        self.hit_points = (self.hit_points - amount).max(0);
    }
}
