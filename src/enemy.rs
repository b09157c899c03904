//! Enemies that shamble toward the nearest player during their phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::body::{BodyTuning, Damageable, MoveOutcome, Mover, MovingBody, RespawnRule};
use crate::collision::CollisionQuery;
use crate::components::{BlockerKind, BodyRef, Blocker};
use crate::constants::{DEFAULT_ENEMY_DAMAGE, DEFAULT_ENEMY_MOVE_TIME};
use crate::presentation::{AnimationCue, Presenter, SoundClip};
use crate::vector_math::dominant_axis_step;

/// Tuning shared by every enemy on a board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Movement tuning.
    pub body: BodyTuning,
    /// Seconds one move occupies in the enemy phase.
    pub move_time: f32,
    /// Food drained from a player the enemy walks into.
    pub player_damage: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            body: BodyTuning::default(),
            move_time: DEFAULT_ENEMY_MOVE_TIME,
            player_damage: DEFAULT_ENEMY_DAMAGE,
        }
    }
}

/// A hostile mover.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    index: usize,
    body: MovingBody,
    move_time: f32,
    player_damage: i32,
}

impl Enemy {
    /// Places enemy `index` at `position`.
    #[must_use]
    pub const fn new(index: usize, position: Vec2, tuning: &EnemyTuning) -> Self {
        Self {
            index,
            body: MovingBody::new(position, tuning.body, RespawnRule::Random),
            move_time: tuning.move_time,
            player_damage: tuning.player_damage,
        }
    }

    /// Roster index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Seconds this enemy's move occupies.
    #[must_use]
    pub const fn move_time(&self) -> f32 {
        self.move_time
    }

    /// Unit step toward the closest of `targets`.
    ///
    /// Moves along the axis with the larger gap; returns zero when there is
    /// nobody to chase.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::enemy::{Enemy, EnemyTuning};
    /// use glam::Vec2;
    /// let enemy = Enemy::new(0, Vec2::ZERO, &EnemyTuning::default());
    /// let step = enemy.step_towards([Vec2::new(5.0, 1.0), Vec2::new(-1.0, 2.0)]);
    /// assert_eq!(step, Vec2::new(0.0, 1.0));
    /// ```
    #[must_use]
    pub fn step_towards(&self, targets: impl IntoIterator<Item = Vec2>) -> Vec2 {
        let here = self.body.position();
        targets
            .into_iter()
            .min_by(|a, b| here.distance_squared(*a).total_cmp(&here.distance_squared(*b)))
            .map_or(Vec2::ZERO, |target| dominant_axis_step(target - here))
    }

    /// Moves one step in `direction`, spending this enemy's move time.
    pub fn attempt_move(&mut self, direction: Vec2, world: &dyn CollisionQuery) -> MoveOutcome {
        self.body.move_by(
            direction,
            self.move_time,
            world,
            Blocker::Body(BodyRef::Enemy(self.index)),
        )
    }
}

impl Mover for Enemy {
    fn body(&self) -> &MovingBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MovingBody {
        &mut self.body
    }

    fn interacts_with(&self) -> Option<BlockerKind> {
        Some(BlockerKind::Player)
    }

    fn on_cant_move(&mut self, target: &mut dyn Damageable, presenter: &mut dyn Presenter) {
        target.take_damage(self.player_damage);
        presenter.trigger_animation(BodyRef::Enemy(self.index), AnimationCue::EnemyAttack);
        presenter.play_clip(SoundClip::EnemyAttack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Obstacles;
    use crate::geometry::Rect;
    use crate::presentation::MockPresenter;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn enemy() -> Enemy {
        Enemy::new(2, Vec2::ZERO, &EnemyTuning::default())
    }

    #[rstest]
    fn nobody_to_chase_means_no_step(enemy: Enemy) {
        assert_eq!(enemy.step_towards(std::iter::empty()), Vec2::ZERO);
    }

    #[rstest]
    fn one_move_covers_one_cell(mut enemy: Enemy) {
        let outcome = enemy.attempt_move(Vec2::X, &Obstacles::new());
        assert!(outcome.moved);
        assert!((enemy.body().position().x - 1.0).abs() < 1e-5);
    }

    #[rstest]
    fn blocked_by_player_reports_interaction(mut enemy: Enemy) {
        let mut world = Obstacles::new();
        world.push(
            Blocker::Body(BodyRef::Player(0)),
            Rect::from_centre(Vec2::new(1.0, 0.0), Vec2::splat(0.45)),
        );
        let outcome = enemy.attempt_move(Vec2::X, &world);
        assert_eq!(
            enemy.blocked_by_interactable(&outcome),
            Some(Blocker::Body(BodyRef::Player(0)))
        );
    }

    struct Victim(i32);

    impl Damageable for Victim {
        fn take_damage(&mut self, amount: i32) {
            self.0 -= amount;
        }
    }

    #[rstest]
    fn attack_drains_and_cues(mut enemy: Enemy) {
        let mut presenter = MockPresenter::new();
        presenter
            .expect_trigger_animation()
            .with(eq(BodyRef::Enemy(2)), eq(AnimationCue::EnemyAttack))
            .times(1)
            .return_const(());
        presenter
            .expect_play_clip()
            .with(eq(SoundClip::EnemyAttack))
            .times(1)
            .return_const(());
        let mut victim = Victim(50);
        enemy.on_cant_move(&mut victim, &mut presenter);
        assert_eq!(victim.0, 40);
    }
}
