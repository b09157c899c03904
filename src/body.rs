//! Kinematic core shared by every mover.
//!
//! A [`MovingBody`] blends input-driven velocity with knockback, refuses to
//! move through anything a [`CollisionQuery`] reports, and tracks the
//! death/respawn lifecycle:
//!
//! ```text
//! Active --(leaves background)--> Dying --(respawn delay)--> Active
//! ```
//!
//! While dying the body is inactive: it does not move, does not block, and
//! cannot be hit. The respawn delay itself is scheduled by the match.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionQuery, Hit};
use crate::components::{Blocker, BlockerKind};
use crate::constants::{
    DEFAULT_HALF_EXTENT, DEFAULT_MAX_SPEED, DEFAULT_RESPAWN_DELAY, DEFAULT_SPEED_DECAY,
    INPUT_DEADZONE_SQ,
};
use crate::geometry::Rect;
use crate::presentation::Presenter;
use crate::vector_math::decay_velocity;

/// Movement tuning for one kind of body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    /// Speed reached instantly under input, in units per second.
    pub max_speed: f32,
    /// Speed lost per tick once input stops driving the body.
    pub speed_decay: f32,
    /// Seconds between death and respawn.
    pub respawn_delay: f32,
    /// Half side of the square collider.
    pub half_extent: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            speed_decay: DEFAULT_SPEED_DECAY,
            respawn_delay: DEFAULT_RESPAWN_DELAY,
            half_extent: DEFAULT_HALF_EXTENT,
        }
    }
}

/// Where a body reappears inside the safe zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RespawnRule {
    /// Uniformly random point.
    Random,
    /// Exact centre.
    Centre,
}

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Whether the position was committed.
    pub moved: bool,
    /// What blocked the move, if anything.
    pub hit: Option<Hit>,
}

impl MoveOutcome {
    const IDLE: Self = Self {
        moved: false,
        hit: None,
    };
}

/// Position, velocity and lifecycle of a mover.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingBody {
    position: Vec2,
    velocity: Vec2,
    tuning: BodyTuning,
    respawn_rule: RespawnRule,
    input_override: bool,
    dying: bool,
    active: bool,
}

impl MovingBody {
    /// Creates an active body at rest with input override enabled.
    #[must_use]
    pub const fn new(position: Vec2, tuning: BodyTuning, respawn_rule: RespawnRule) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            tuning,
            respawn_rule,
            input_override: true,
            dying: false,
            active: true,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity in units per second.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Tuning the body was built with.
    #[must_use]
    pub const fn tuning(&self) -> &BodyTuning {
        &self.tuning
    }

    /// Whether the body takes part in the simulation.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a death episode is in flight.
    #[must_use]
    pub const fn is_dying(&self) -> bool {
        self.dying
    }

    /// Whether fresh input replaces the current velocity.
    #[must_use]
    pub const fn input_override_enabled(&self) -> bool {
        self.input_override
    }

    /// Whether the body has no velocity left.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Collider rectangle at the current position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_centre(self.position, Vec2::splat(self.tuning.half_extent))
    }

    /// Teleports the body without touching its velocity.
    pub const fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Activates or deactivates the body.
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Enables or disables input override.
    pub const fn enable_input_override(&mut self, enabled: bool) {
        self.input_override = enabled;
    }

    /// Stops the body dead.
    pub const fn reset_movement(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Velocity the body would take for `input` this tick.
    ///
    /// With override enabled and a meaningful input the velocity snaps to
    /// `input * max_speed`. Otherwise the current velocity loses
    /// `speed_decay` of magnitude, keeping its direction and bottoming out at
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::body::{BodyTuning, MovingBody, RespawnRule};
    /// use glam::Vec2;
    /// let body = MovingBody::new(Vec2::ZERO, BodyTuning::default(), RespawnRule::Random);
    /// let v = body.modified_velocity(Vec2::X);
    /// assert_eq!(v, Vec2::new(BodyTuning::default().max_speed, 0.0));
    /// ```
    #[must_use]
    pub fn modified_velocity(&self, input: Vec2) -> Vec2 {
        if self.input_override && input.length_squared() > INPUT_DEADZONE_SQ {
            input * self.tuning.max_speed
        } else {
            decay_velocity(self.velocity, self.tuning.speed_decay)
        }
    }

    /// Attempts one tick of movement driven by `input`.
    ///
    /// Casts from the current position to `position + velocity * dt`,
    /// skipping `me`. A clear path commits the new position. A blocked path
    /// leaves the position untouched and reports the hit. The candidate
    /// velocity is kept in both cases so knockback bleeds off against
    /// obstacles instead of pinning the body. Inactive bodies do nothing.
    pub fn move_by(
        &mut self,
        input: Vec2,
        dt: f32,
        world: &dyn CollisionQuery,
        me: Blocker,
    ) -> MoveOutcome {
        if !self.active {
            return MoveOutcome::IDLE;
        }
        let velocity = self.modified_velocity(input);
        let start = self.position;
        let end = start + velocity * dt;
        self.velocity = velocity;

        match world.linecast(start, end, self.tuning.half_extent, Some(me)) {
            None => {
                self.position = end;
                MoveOutcome {
                    moved: true,
                    hit: None,
                }
            }
            Some(hit) => MoveOutcome {
                moved: false,
                hit: Some(hit),
            },
        }
    }

    /// Applies a knockback impulse.
    ///
    /// Input override is switched off so the impulse decays naturally until
    /// something explicitly re-enables it.
    pub fn push(&mut self, impulse: Vec2) {
        self.input_override = false;
        self.velocity += impulse;
    }

    /// Starts a death episode if the body has left `background`.
    ///
    /// Returns `true` only for the call that starts the episode; repeated
    /// calls while dying are no-ops.
    pub fn die_if_needed(&mut self, background: &Rect) -> bool {
        if self.dying || background.contains(self.position) {
            return false;
        }
        self.dying = true;
        self.active = false;
        self.input_override = false;
        true
    }

    /// Ends any death episode and places the body inside `safe_zone`.
    pub fn respawn<R: Rng + ?Sized>(&mut self, safe_zone: &Rect, rng: &mut R) {
        self.reset_movement();
        self.active = true;
        self.position = match self.respawn_rule {
            RespawnRule::Random => safe_zone.random_point(rng),
            RespawnRule::Centre => safe_zone.centre(),
        };
        self.input_override = true;
        self.dying = false;
    }

    /// Re-enables input override once knockback has fully decayed.
    ///
    /// Returns `true` when control was handed back.
    pub fn recover_if_at_rest(&mut self) -> bool {
        if self.input_override || self.dying || !self.is_at_rest() {
            return false;
        }
        self.input_override = true;
        true
    }
}

/// Something that can be hurt by a mover walking into it.
pub trait Damageable {
    /// Applies `amount` of damage.
    fn take_damage(&mut self, amount: i32);
}

/// A game object driven by a [`MovingBody`].
///
/// Each mover names the kind of blocker it reacts to and what it does when
/// stopped by one.
pub trait Mover {
    /// Shared kinematic state.
    fn body(&self) -> &MovingBody;

    /// Mutable kinematic state.
    fn body_mut(&mut self) -> &mut MovingBody;

    /// Kind of blocker that triggers [`Mover::on_cant_move`].
    fn interacts_with(&self) -> Option<BlockerKind>;

    /// Reacts to being stopped by a blocker of the expected kind.
    fn on_cant_move(&mut self, target: &mut dyn Damageable, presenter: &mut dyn Presenter);

    /// Returns the blocker this mover should react to after `outcome`.
    ///
    /// Only failed moves stopped by the kind named in
    /// [`Mover::interacts_with`] qualify.
    fn blocked_by_interactable(&self, outcome: &MoveOutcome) -> Option<Blocker> {
        if outcome.moved {
            return None;
        }
        let hit = outcome.hit?;
        let wanted = self.interacts_with()?;
        (hit.blocker.kind() == wanted).then_some(hit.blocker)
    }
}
