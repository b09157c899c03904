//! Axis-aligned rectangles and segment casts against them.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner.
    pub min: Vec2,
    /// Upper-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Builds a rectangle from any two opposite corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::geometry::Rect;
    /// use glam::Vec2;
    /// let r = Rect::from_corners(Vec2::new(2.0, -1.0), Vec2::new(-2.0, 1.0));
    /// assert_eq!(r.min, Vec2::new(-2.0, -1.0));
    /// assert_eq!(r.max, Vec2::new(2.0, 1.0));
    /// ```
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Builds a rectangle centred on `centre` extending `half_size` each way.
    #[must_use]
    pub fn from_centre(centre: Vec2, half_size: Vec2) -> Self {
        let half = half_size.abs();
        Self {
            min: centre - half,
            max: centre + half,
        }
    }

    /// Exact centre point.
    #[must_use]
    pub fn centre(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns a copy grown by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: f32) -> Self {
        Self::from_corners(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Whether `point` lies strictly inside, boundary excluded.
    #[must_use]
    pub fn contains_strictly(&self, point: Vec2) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }

    /// Uniformly random point inside the rectangle.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        Vec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y))
    }

    /// Fraction along `start → end` at which the segment enters the
    /// rectangle.
    ///
    /// Segments starting strictly inside report no entry, as do segments that
    /// only graze or leave the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::geometry::Rect;
    /// use glam::Vec2;
    /// let wall = Rect::from_corners(Vec2::new(2.0, -1.0), Vec2::new(3.0, 1.0));
    /// let t = wall.segment_entry(Vec2::ZERO, Vec2::new(4.0, 0.0)).unwrap();
    /// assert!((t - 0.5).abs() < 1e-6);
    /// assert!(wall.segment_entry(Vec2::ZERO, Vec2::new(1.0, 0.0)).is_none());
    /// ```
    #[must_use]
    pub fn segment_entry(&self, start: Vec2, end: Vec2) -> Option<f32> {
        if self.contains_strictly(start) {
            return None;
        }
        let delta = end - start;
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;
        let axes = [
            (start.x, delta.x, self.min.x, self.max.x),
            (start.y, delta.y, self.min.y, self.max.y),
        ];
        for (origin, step, lo, hi) in axes {
            if step.abs() <= f32::EPSILON {
                // Parallel to this slab: only a strict overlap can hit.
                if origin <= lo || origin >= hi {
                    return None;
                }
                continue;
            }
            let near = (lo - origin) / step;
            let far = (hi - origin) / step;
            t_min = t_min.max(near.min(far));
            t_max = t_max.min(near.max(far));
            if t_min >= t_max {
                return None;
            }
        }
        Some(t_min)
    }
}
