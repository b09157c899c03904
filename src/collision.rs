//! Straight-line collision casts against the blocking set.
//!
//! Movement asks a [`CollisionQuery`] whether the segment it is about to
//! travel crosses anything. The match builds an [`Obstacles`] snapshot of
//! live walls and bodies and hands it to each mover in turn.

use glam::Vec2;

use crate::components::Blocker;
use crate::geometry::Rect;

/// Result of a successful cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// What stopped the cast.
    pub blocker: Blocker,
    /// Fraction of the segment travelled before contact, in `0..=1`.
    pub fraction: f32,
    /// World-space contact point.
    pub point: Vec2,
}

/// Explicit collision query used in place of engine physics callbacks.
pub trait CollisionQuery {
    /// Casts from `start` to `end` and returns the nearest hit.
    ///
    /// `ignore` is skipped; movers pass themselves so their own collider is
    /// never reported. `radius` inflates every obstacle so the probing body's
    /// extent is respected.
    fn linecast(&self, start: Vec2, end: Vec2, radius: f32, ignore: Option<Blocker>)
        -> Option<Hit>;
}

/// Snapshot of blocking rectangles.
#[derive(Clone, Debug, Default)]
pub struct Obstacles {
    boxes: Vec<(Blocker, Rect)>,
}

impl Obstacles {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a blocking rectangle.
    pub fn push(&mut self, blocker: Blocker, bounds: Rect) {
        self.boxes.push((blocker, bounds));
    }

    /// Replaces the bounds recorded for `blocker`, if present.
    ///
    /// Used after a body moves so later casts in the same tick see it at
    /// its new position.
    pub fn update(&mut self, blocker: Blocker, bounds: Rect) {
        if let Some((_, slot)) = self.boxes.iter_mut().find(|(b, _)| *b == blocker) {
            *slot = bounds;
        }
    }

    /// Drops `blocker` from the snapshot.
    pub fn remove(&mut self, blocker: Blocker) {
        self.boxes.retain(|(b, _)| *b != blocker);
    }

    /// Number of blocking rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl CollisionQuery for Obstacles {
    fn linecast(
        &self,
        start: Vec2,
        end: Vec2,
        radius: f32,
        ignore: Option<Blocker>,
    ) -> Option<Hit> {
        self.boxes
            .iter()
            .filter(|(blocker, _)| Some(*blocker) != ignore)
            .filter_map(|(blocker, bounds)| {
                bounds
                    .inflate(radius)
                    .segment_entry(start, end)
                    .map(|fraction| Hit {
                        blocker: *blocker,
                        fraction,
                        point: start.lerp(end, fraction),
                    })
            })
            .min_by(|a, b| a.fraction.total_cmp(&b.fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BodyRef;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn corridor() -> Obstacles {
        let mut obstacles = Obstacles::new();
        obstacles.push(
            Blocker::Wall(0),
            Rect::from_corners(Vec2::new(4.0, -1.0), Vec2::new(5.0, 1.0)),
        );
        obstacles.push(
            Blocker::Body(BodyRef::Player(1)),
            Rect::from_centre(Vec2::new(2.0, 0.0), Vec2::splat(0.5)),
        );
        obstacles
    }

    #[rstest]
    fn nearest_hit_wins(corridor: Obstacles) {
        let hit = corridor
            .linecast(Vec2::ZERO, Vec2::new(6.0, 0.0), 0.0, None)
            .expect("expected a hit");
        assert_eq!(hit.blocker, Blocker::Body(BodyRef::Player(1)));
        assert_relative_eq!(hit.point.x, 1.5, epsilon = 1e-5);
    }

    #[rstest]
    fn ignored_blocker_is_transparent(corridor: Obstacles) {
        let hit = corridor
            .linecast(
                Vec2::ZERO,
                Vec2::new(6.0, 0.0),
                0.0,
                Some(Blocker::Body(BodyRef::Player(1))),
            )
            .expect("expected the wall");
        assert_eq!(hit.blocker, Blocker::Wall(0));
    }

    #[rstest]
    fn radius_inflates_obstacles(corridor: Obstacles) {
        assert!(corridor
            .linecast(Vec2::new(0.0, 1.2), Vec2::new(6.0, 1.2), 0.0, None)
            .is_none());
        assert!(corridor
            .linecast(Vec2::new(0.0, 1.2), Vec2::new(6.0, 1.2), 0.45, None)
            .is_some());
    }

    #[rstest]
    fn removed_blockers_stop_blocking(mut corridor: Obstacles) {
        corridor.remove(Blocker::Body(BodyRef::Player(1)));
        corridor.remove(Blocker::Wall(0));
        assert!(corridor.is_empty());
        assert!(corridor
            .linecast(Vec2::ZERO, Vec2::new(6.0, 0.0), 0.0, None)
            .is_none());
    }
}
