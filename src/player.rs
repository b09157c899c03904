//! Player-controlled movers.
//!
//! A [`Player`] turns one input slot into movement, aiming and primary fire.
//! Every move attempt costs one unit of food and ends the player's turn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::body::{BodyTuning, Damageable, MoveOutcome, Mover, MovingBody, RespawnRule};
use crate::collision::CollisionQuery;
use crate::components::{BlockerKind, BodyRef, Blocker};
use crate::constants::{
    AIM_EPSILON_SQ, DEFAULT_AIM_LINE_DISTANCE, DEFAULT_AIM_LINE_THICKNESS, DEFAULT_FIRE_COOLDOWN,
    DEFAULT_PLAYER_FOOD, DEFAULT_WALL_DAMAGE, INPUT_SLOTS,
};
use crate::error::SetupError;
use crate::geometry::Line;
use crate::input::{InputSource, SlotBindings};
use crate::presentation::{AnimationCue, Presenter, SoundClip};
use crate::score::Team;
use crate::turn::TurnState;
use crate::vector_math::vec_normalize;

/// Tuning shared by every player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement tuning.
    pub body: BodyTuning,
    /// Seconds between primary fire shots.
    pub fire_cooldown: f32,
    /// Damage dealt to a wall the player walks into.
    pub wall_damage: i32,
    /// Length of the aiming guide.
    pub aim_line_distance: f32,
    /// Thickness of the aiming guide.
    pub aim_line_thickness: f32,
    /// Food at match start.
    pub starting_food: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            body: BodyTuning::default(),
            fire_cooldown: DEFAULT_FIRE_COOLDOWN,
            wall_damage: DEFAULT_WALL_DAMAGE,
            aim_line_distance: DEFAULT_AIM_LINE_DISTANCE,
            aim_line_thickness: DEFAULT_AIM_LINE_THICKNESS,
            starting_food: DEFAULT_PLAYER_FOOD,
        }
    }
}

/// One tick's worth of a player's input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    /// Raw movement axes.
    pub movement: Vec2,
    /// Normalised aim axes, zero when untouched.
    pub aim: Vec2,
    /// Primary fire went down this tick.
    pub fire: bool,
}

impl Controls {
    /// Whether any movement axis is off centre.
    #[must_use]
    pub fn wants_to_move(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Request to spawn a projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    /// Index of the firing player.
    pub owner: usize,
    /// Spawn point.
    pub origin: Vec2,
    /// Unit flight direction.
    pub direction: Vec2,
}

/// A player-controlled mover.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    index: usize,
    slot: usize,
    team: Team,
    bindings: SlotBindings,
    tuning: PlayerTuning,
    body: MovingBody,
    food: i32,
    aim: Vec2,
    last_fire: Option<f32>,
    holding_egg: bool,
    aim_line: Line,
}

impl Player {
    /// Builds player `index` reading input `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidSlot`] when `slot` has no bindings.
    pub fn new(
        index: usize,
        slot: usize,
        team: Team,
        position: Vec2,
        tuning: PlayerTuning,
    ) -> Result<Self, SetupError> {
        let bindings = SlotBindings::for_slot(slot).ok_or(SetupError::InvalidSlot {
            slot,
            max: INPUT_SLOTS,
        })?;
        Ok(Self {
            index,
            slot,
            team,
            bindings,
            tuning,
            body: MovingBody::new(position, tuning.body, RespawnRule::Random),
            food: tuning.starting_food,
            aim: Vec2::ZERO,
            last_fire: None,
            holding_egg: false,
            aim_line: Line::default(),
        })
    }

    /// Index into the match's player list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Input slot this player reads.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Team membership.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Remaining food.
    #[must_use]
    pub const fn food(&self) -> i32 {
        self.food
    }

    /// Whether the player has run out of food.
    #[must_use]
    pub const fn is_starved(&self) -> bool {
        self.food <= 0
    }

    /// Last aim direction, zero until the player first aims.
    #[must_use]
    pub const fn aim_direction(&self) -> Vec2 {
        self.aim
    }

    /// Clock time of the last shot.
    #[must_use]
    pub const fn last_fire(&self) -> Option<f32> {
        self.last_fire
    }

    /// Whether the player carries the egg.
    #[must_use]
    pub const fn is_holding_egg(&self) -> bool {
        self.holding_egg
    }

    /// Marks the player as carrying the egg or not.
    pub const fn set_holding_egg(&mut self, holding: bool) {
        self.holding_egg = holding;
    }

    /// Aiming guide segment.
    #[must_use]
    pub const fn aim_line(&self) -> &Line {
        &self.aim_line
    }

    /// Polls this player's slot.
    pub fn read_controls(&self, input: &dyn InputSource) -> Controls {
        let b = &self.bindings;
        Controls {
            movement: Vec2::new(input.axis_raw(&b.horizontal), input.axis_raw(&b.vertical)),
            aim: vec_normalize(Vec2::new(
                input.axis_raw(&b.horizontal_aim),
                input.axis_raw(&b.vertical_aim),
            )),
            fire: input.button_down(&b.fire),
        }
    }

    /// Spends one food and tries to move along `direction`.
    ///
    /// The turn passes to the enemies whether or not the move succeeded.
    pub fn attempt_move(
        &mut self,
        direction: Vec2,
        dt: f32,
        world: &dyn CollisionQuery,
        turn: &mut TurnState,
    ) -> MoveOutcome {
        self.food -= 1;
        let outcome = self.body.move_by(
            direction,
            dt,
            world,
            Blocker::Body(BodyRef::Player(self.index)),
        );
        turn.players_turn = false;
        outcome
    }

    /// Points the aiming guide along `direction`.
    ///
    /// A negligible direction hides the guide and keeps the previous aim.
    pub fn aim_towards(&mut self, direction: Vec2) {
        if direction.length_squared() > AIM_EPSILON_SQ {
            let from = self.body.position();
            let to = from + direction * self.tuning.aim_line_distance;
            self.aim_line.activate(from, to, self.tuning.aim_line_thickness);
            self.aim = direction;
        } else {
            self.aim_line.deactivate();
        }
    }

    /// Fires along the current aim if the cooldown allows.
    ///
    /// Returns `None` without side effects when the player has never aimed or
    /// fired less than `fire_cooldown` seconds ago.
    pub fn fire_primary(&mut self, now: f32) -> Option<Launch> {
        if self.aim.length_squared() < AIM_EPSILON_SQ {
            return None;
        }
        if self
            .last_fire
            .is_some_and(|last| now - last < self.tuning.fire_cooldown)
        {
            return None;
        }
        self.last_fire = Some(now);
        Some(Launch {
            owner: self.index,
            origin: self.body.position(),
            direction: self.aim,
        })
    }

    /// Removes `amount` food.
    pub const fn lose_food(&mut self, amount: i32) {
        self.food -= amount;
    }

    /// Places the player for a new level.
    ///
    /// Food carries over between levels; everything else is cleared.
    pub fn reset_for_level(&mut self, position: Vec2) {
        self.body = MovingBody::new(position, self.tuning.body, RespawnRule::Random);
        self.holding_egg = false;
        self.aim_line.deactivate();
    }
}

impl Damageable for Player {
    fn take_damage(&mut self, amount: i32) {
        self.lose_food(amount);
    }
}

impl Mover for Player {
    fn body(&self) -> &MovingBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut MovingBody {
        &mut self.body
    }

    fn interacts_with(&self) -> Option<BlockerKind> {
        Some(BlockerKind::Wall)
    }

    fn on_cant_move(&mut self, target: &mut dyn Damageable, presenter: &mut dyn Presenter) {
        target.take_damage(self.tuning.wall_damage);
        presenter.trigger_animation(BodyRef::Player(self.index), AnimationCue::PlayerChop);
        presenter.play_clip(SoundClip::Chop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Obstacles;
    use crate::geometry::Rect;
    use crate::input::MockInputSource;
    use crate::presentation::MockPresenter;
    use crate::wall::Wall;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn player() -> Player {
        Player::new(1, 2, Team::Left, Vec2::ZERO, PlayerTuning::default()).expect("valid slot")
    }

    #[rstest]
    fn unknown_slot_is_rejected() {
        let err = Player::new(0, 4, Team::Right, Vec2::ZERO, PlayerTuning::default())
            .expect_err("slot 4 does not exist");
        assert_eq!(err, SetupError::InvalidSlot { slot: 4, max: 4 });
    }

    #[rstest]
    fn controls_come_from_own_slot(player: Player) {
        let mut input = MockInputSource::new();
        input.expect_axis_raw().returning(|name| match name {
            "Horizontal2" => 1.0,
            "VerticalAim2" => -3.0,
            _ => 0.0,
        });
        input
            .expect_button_down()
            .with(eq("Fire2"))
            .return_const(true);
        let controls = player.read_controls(&input);
        assert_eq!(controls.movement, Vec2::X);
        assert_eq!(controls.aim, Vec2::new(0.0, -1.0));
        assert!(controls.fire);
    }

    #[rstest]
    fn every_attempt_costs_food_and_ends_turn(mut player: Player) {
        let mut world = Obstacles::new();
        world.push(
            Blocker::Wall(0),
            Rect::from_corners(Vec2::new(0.5, -1.0), Vec2::new(1.5, 1.0)),
        );
        let mut turn = TurnState {
            players_turn: true,
            enemies_moving: false,
            doing_setup: false,
        };
        let outcome = player.attempt_move(Vec2::X, 0.1, &world, &mut turn);
        assert!(!outcome.moved);
        assert_eq!(player.food(), DEFAULT_PLAYER_FOOD - 1);
        assert!(!turn.players_turn);
        assert_eq!(
            player.blocked_by_interactable(&outcome),
            Some(Blocker::Wall(0))
        );
    }

    #[rstest]
    fn chopping_damages_wall_and_cues(mut player: Player) {
        let mut presenter = MockPresenter::new();
        presenter
            .expect_trigger_animation()
            .with(eq(BodyRef::Player(1)), eq(AnimationCue::PlayerChop))
            .times(1)
            .return_const(());
        presenter
            .expect_play_clip()
            .with(eq(SoundClip::Chop))
            .times(1)
            .return_const(());
        let mut wall = Wall::new(Rect::from_corners(Vec2::ZERO, Vec2::ONE));
        player.on_cant_move(&mut wall, &mut presenter);
        assert_eq!(wall.hit_points, 2);
    }

    #[rstest]
    fn cannot_fire_before_aiming(mut player: Player) {
        assert!(player.fire_primary(10.0).is_none());
        assert!(player.last_fire().is_none());
    }

    #[rstest]
    #[case(0.5, false)]
    #[case(1.99, false)]
    #[case(2.0, true)]
    #[case(5.0, true)]
    fn cooldown_gates_second_shot(mut player: Player, #[case] gap: f32, #[case] fires: bool) {
        player.aim_towards(Vec2::Y);
        let first = player.fire_primary(1.0).expect("first shot fires");
        assert_eq!(first.direction, Vec2::Y);
        assert_eq!(first.owner, 1);
        assert_eq!(player.fire_primary(1.0 + gap).is_some(), fires);
    }

    #[rstest]
    fn aim_guide_follows_aim(mut player: Player) {
        player.aim_towards(Vec2::X);
        assert!(player.aim_line().is_active());
        assert_eq!(player.aim_line().end(), Vec2::new(DEFAULT_AIM_LINE_DISTANCE, 0.0));
        player.aim_towards(Vec2::ZERO);
        assert!(!player.aim_line().is_active());
        assert_eq!(player.aim_direction(), Vec2::X);
    }
}
