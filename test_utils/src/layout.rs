//! Convenience constructors for boards and configs used in tests.

use egg_arena::board::{BoardLayout, Marker, BACKGROUND, EGG, LEFT_BASE, RIGHT_BASE, SAFE_ZONE};
use egg_arena::{ArenaConfig, PlayerSpec, Rect, Team};
use glam::Vec2;

/// A wide board with no walls or enemies and the egg at `egg`.
///
/// The background spans `(-20, -10)` to `(20, 10)`, the safe zone
/// `(-2, -2)` to `(2, 2)`, and the bases sit at `(-8, 0)` and `(8, 0)`.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use test_utils::open_board;
/// let board = open_board(Vec2::ZERO);
/// assert!(board.walls.is_empty());
/// assert!(board.enemies.is_empty());
/// ```
#[must_use]
pub fn open_board(egg: Vec2) -> BoardLayout {
    BoardLayout::default()
        .with_marker(
            BACKGROUND,
            Marker::Area(Rect::from_corners(
                Vec2::new(-20.0, -10.0),
                Vec2::new(20.0, 10.0),
            )),
        )
        .with_marker(
            SAFE_ZONE,
            Marker::Area(Rect::from_corners(Vec2::new(-2.0, -2.0), Vec2::new(2.0, 2.0))),
        )
        .with_marker(LEFT_BASE, Marker::Point(Vec2::new(-8.0, 0.0)))
        .with_marker(RIGHT_BASE, Marker::Point(Vec2::new(8.0, 0.0)))
        .with_marker(EGG, Marker::Point(egg))
}

/// A seat on `team` reading `slot`, starting at `spawn`.
#[must_use]
pub const fn seat(slot: usize, team: Team, spawn: Vec2) -> PlayerSpec {
    PlayerSpec {
        slot,
        team,
        spawn: Some(spawn),
    }
}

/// Default tuning on `board` with `seats`, and no level card delay.
///
/// # Examples
/// ```
/// use egg_arena::Team;
/// use glam::Vec2;
/// use test_utils::{open_board, quick_config, seat};
/// let config = quick_config(open_board(Vec2::ZERO), vec![seat(0, Team::Left, Vec2::ZERO)]);
/// assert_eq!(config.players.len(), 1);
/// assert_eq!(config.timing.level_start_delay, 0.0);
/// ```
#[must_use]
pub fn quick_config(board: BoardLayout, seats: Vec<PlayerSpec>) -> ArenaConfig {
    let mut config = ArenaConfig {
        board,
        players: seats,
        ..ArenaConfig::default()
    };
    config.timing.level_start_delay = 0.0;
    config
}
