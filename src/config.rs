//! Match configuration.
//!
//! [`ArenaConfig`] gathers every tunable the simulation reads. Missing fields
//! fall back to the defaults in [`crate::constants`], so a config file only
//! needs the values it changes.

use std::path::Path;

use glam::Vec2;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::board::{BoardLayout, Marker, BACKGROUND, EGG, LEFT_BASE, RIGHT_BASE, SAFE_ZONE};
use crate::body::BodyTuning;
use crate::constants::{
    DEFAULT_LEVEL_START_DELAY, DEFAULT_RESTART_DELAY, DEFAULT_TURN_DELAY, INPUT_SLOTS,
    PICKUP_RADIUS, WINNING_SCORE,
};
use crate::enemy::EnemyTuning;
use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::player::PlayerTuning;
use crate::projectile::ProjectileTuning;
use crate::score::Team;
use crate::wall::Wall;

/// Delays driving the level and turn cadence, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time the level card stays up.
    pub level_start_delay: f32,
    /// Pause opening every enemy phase.
    pub turn_delay: f32,
    /// Time between a win and the next level.
    pub restart_delay: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            level_start_delay: DEFAULT_LEVEL_START_DELAY,
            turn_delay: DEFAULT_TURN_DELAY,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

/// One seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Input slot, `0..4`.
    pub slot: usize,
    /// Team the player scores for.
    pub team: Team,
    /// Fixed start position; a random safe-zone point when absent.
    #[serde(default)]
    pub spawn: Option<Vec2>,
}

/// Full match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Player tuning.
    pub player: PlayerTuning,
    /// Enemy tuning.
    pub enemy: EnemyTuning,
    /// Egg movement tuning.
    pub egg: BodyTuning,
    /// Projectile tuning.
    pub projectile: ProjectileTuning,
    /// Level and turn delays.
    pub timing: TimingConfig,
    /// Goals needed to win a level.
    pub winning_score: u32,
    /// Distance for egg pickup and base delivery.
    pub pickup_radius: f32,
    /// Players in index order.
    pub players: Vec<PlayerSpec>,
    /// Board served for every level.
    pub board: BoardLayout,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            egg: BodyTuning::default(),
            projectile: ProjectileTuning::default(),
            timing: TimingConfig::default(),
            winning_score: WINNING_SCORE,
            pickup_radius: PICKUP_RADIUS,
            players: vec![
                PlayerSpec {
                    slot: 0,
                    team: Team::Left,
                    spawn: None,
                },
                PlayerSpec {
                    slot: 1,
                    team: Team::Right,
                    spawn: None,
                },
            ],
            board: default_board(),
        }
    }
}

fn default_board() -> BoardLayout {
    let wall = |x: f32, y: f32| Wall::new(Rect::from_centre(Vec2::new(x, y), Vec2::splat(0.5)));
    BoardLayout::default()
        .with_marker(
            BACKGROUND,
            Marker::Area(Rect::from_corners(Vec2::new(-9.0, -5.0), Vec2::new(9.0, 5.0))),
        )
        .with_marker(
            SAFE_ZONE,
            Marker::Area(Rect::from_corners(Vec2::new(-2.0, -2.0), Vec2::new(2.0, 2.0))),
        )
        .with_marker(LEFT_BASE, Marker::Point(Vec2::new(-7.0, 0.0)))
        .with_marker(RIGHT_BASE, Marker::Point(Vec2::new(7.0, 0.0)))
        .with_marker(EGG, Marker::Point(Vec2::ZERO))
        .with_wall(wall(-4.0, 2.0))
        .with_wall(wall(-4.0, -2.0))
        .with_wall(wall(4.0, 2.0))
        .with_wall(wall(4.0, -2.0))
        .with_enemy(Vec2::new(0.0, 4.0))
        .with_enemy(Vec2::new(0.0, -4.0))
}

impl ArenaConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for inconsistent values.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::config::ArenaConfig;
    /// let cfg = ArenaConfig::from_json_str(r#"{ "winning_score": 5 }"#).unwrap();
    /// assert_eq!(cfg.winning_score, 5);
    /// assert_eq!(cfg.players.len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// as [`ArenaConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for spec in &self.players {
            if spec.slot >= INPUT_SLOTS {
                return Err(ConfigError::Invalid(format!(
                    "player slot {} is outside 0..{INPUT_SLOTS}",
                    spec.slot
                )));
            }
            if !seen.insert(spec.slot) {
                return Err(ConfigError::Invalid(format!(
                    "player slot {} is used twice",
                    spec.slot
                )));
            }
        }
        let delays = [
            ("timing.level_start_delay", self.timing.level_start_delay),
            ("timing.turn_delay", self.timing.turn_delay),
            ("timing.restart_delay", self.timing.restart_delay),
            ("enemy.move_time", self.enemy.move_time),
            ("player.fire_cooldown", self.player.fire_cooldown),
            ("player.body.respawn_delay", self.player.body.respawn_delay),
            ("enemy.body.respawn_delay", self.enemy.body.respawn_delay),
            ("egg.respawn_delay", self.egg.respawn_delay),
            ("projectile.time_to_live", self.projectile.time_to_live),
        ];
        if let Some((name, _)) = delays.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Invalid(format!("{name} must be non-negative")));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::Invalid("winning_score must be at least 1".into()));
        }
        if self.pickup_radius.is_nan() || self.pickup_radius <= 0.0 {
            return Err(ConfigError::Invalid("pickup_radius must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        ArenaConfig::default().validate().expect("defaults validate");
    }

    #[rstest]
    #[case::bad_slot(r#"{ "players": [ { "slot": 4, "team": "Left" } ] }"#, "outside")]
    #[case::shared_slot(
        r#"{ "players": [ { "slot": 1, "team": "Left" }, { "slot": 1, "team": "Right" } ] }"#,
        "used twice"
    )]
    #[case::negative_delay(r#"{ "timing": { "turn_delay": -1.0 } }"#, "turn_delay")]
    #[case::no_goals(r#"{ "winning_score": 0 }"#, "winning_score")]
    fn invalid_values_are_rejected(#[case] json: &str, #[case] needle: &str) {
        match ArenaConfig::from_json_str(json) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains(needle), "{msg}"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ArenaConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[rstest]
    fn partial_tuning_keeps_other_defaults() {
        let cfg = ArenaConfig::from_json_str(r#"{ "player": { "fire_cooldown": 0.5 } }"#)
            .expect("valid config");
        assert!((cfg.player.fire_cooldown - 0.5).abs() < f32::EPSILON);
        assert_eq!(cfg.player.starting_food, PlayerTuning::default().starting_food);
    }
}
