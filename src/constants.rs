//! Gameplay constants shared across the simulation.
//!
//! Values here are the defaults used by [`crate::config::ArenaConfig`]; the
//! configuration may override any tunable. Thresholds that define behaviour
//! rather than balance (dead zones, slot count) are fixed.

/// Squared input magnitude above which a movement input overrides velocity.
pub const INPUT_DEADZONE_SQ: f32 = 0.1;
/// Squared aim magnitude below which an aim input is treated as absent.
pub const AIM_EPSILON_SQ: f32 = f32::EPSILON;
/// Number of independent input slots.
pub const INPUT_SLOTS: usize = 4;

/// Default top speed of a mover in units per second.
pub const DEFAULT_MAX_SPEED: f32 = 5.0;
/// Default per-tick reduction of speed once input stops driving a body.
pub const DEFAULT_SPEED_DECAY: f32 = 0.1;
/// Seconds a body stays dead before it respawns.
pub const DEFAULT_RESPAWN_DELAY: f32 = 3.0;
/// Half the side length of the square collider carried by every mover.
pub const DEFAULT_HALF_EXTENT: f32 = 0.45;

/// Seconds between primary fire shots.
pub const DEFAULT_FIRE_COOLDOWN: f32 = 2.0;
/// Damage a player deals to a wall when walking into it.
pub const DEFAULT_WALL_DAMAGE: i32 = 1;
/// Length of the aiming guide drawn from a player.
pub const DEFAULT_AIM_LINE_DISTANCE: f32 = 2.0;
/// Thickness of the aiming guide.
pub const DEFAULT_AIM_LINE_THICKNESS: f32 = 0.1;
/// Food each player starts the match with.
pub const DEFAULT_PLAYER_FOOD: i32 = 100;

/// Seconds an enemy's move occupies before the next enemy acts.
pub const DEFAULT_ENEMY_MOVE_TIME: f32 = 0.2;
/// Food drained from a player an enemy walks into.
pub const DEFAULT_ENEMY_DAMAGE: i32 = 10;

/// Projectile launch speed in units per second.
pub const DEFAULT_LAUNCH_SPEED: f32 = 10.0;
/// Seconds a projectile lives before it expires unhit.
pub const PROJECTILE_TIME_TO_LIVE: f32 = 1.0;
/// Scale applied to the projectile-to-target offset to form the knockback.
pub const PUSH_MULTIPLIER: f32 = 13.0;
/// Contact radius of a projectile.
pub const DEFAULT_PROJECTILE_RADIUS: f32 = 0.25;

/// Seconds the level card stays up before players may act.
pub const DEFAULT_LEVEL_START_DELAY: f32 = 2.0;
/// Delay that opens every enemy phase.
pub const DEFAULT_TURN_DELAY: f32 = 0.1;
/// Seconds between a win and the level restart.
pub const DEFAULT_RESTART_DELAY: f32 = 2.0;
/// Score that wins a level.
pub const WINNING_SCORE: u32 = 3;
/// Distance under which a player picks up the egg or reaches a base.
pub const PICKUP_RADIUS: f32 = 1.0;
/// Hit points of a wall built without an explicit value.
pub const DEFAULT_WALL_HIT_POINTS: i32 = 3;
