//! The egg both teams fight over.

use glam::Vec2;

use crate::body::{BodyTuning, Damageable, MoveOutcome, Mover, MovingBody, RespawnRule};
use crate::collision::CollisionQuery;
use crate::components::{BlockerKind, BodyRef, Blocker};
use crate::presentation::Presenter;

/// A mover that never drives itself.
///
/// Every tick it attempts a zero move so knockback still carries it. It
/// always respawns at the centre of the safe zone and is inactive while a
/// player holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct Egg {
    body: MovingBody,
}

impl Egg {
    /// Places a fresh egg at `position`.
    #[must_use]
    pub const fn new(position: Vec2, tuning: BodyTuning) -> Self {
        Self {
            body: MovingBody::new(position, tuning, RespawnRule::Centre),
        }
    }

    /// Coasts on whatever velocity knockback left behind.
    pub fn settle(&mut self, dt: f32, world: &dyn CollisionQuery) -> MoveOutcome {
        self.body
            .move_by(Vec2::ZERO, dt, world, Blocker::Body(BodyRef::Egg))
    }
}

impl Mover for Egg {
    fn body(&self) -> &MovingBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MovingBody {
        &mut self.body
    }

    fn interacts_with(&self) -> Option<BlockerKind> {
        None
    }

    fn on_cant_move(&mut self, _target: &mut dyn Damageable, _presenter: &mut dyn Presenter) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Obstacles;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    fn resting_egg_stays_put() {
        let mut egg = Egg::new(Vec2::new(1.0, 1.0), BodyTuning::default());
        let outcome = egg.settle(0.1, &Obstacles::new());
        assert!(outcome.moved);
        assert_eq!(egg.body().position(), Vec2::new(1.0, 1.0));
    }

    #[rstest]
    fn pushed_egg_slides_and_slows() {
        let mut egg = Egg::new(Vec2::ZERO, BodyTuning::default());
        egg.body_mut().push(Vec2::new(2.0, 0.0));
        egg.settle(0.5, &Obstacles::new());
        assert_relative_eq!(egg.body().velocity().x, 1.9, epsilon = 1e-5);
        assert_relative_eq!(egg.body().position().x, 0.95, epsilon = 1e-5);
    }
}
