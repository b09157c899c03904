//! Turn flags and match phases.

use std::fmt;

/// Flags that serialise the player and enemy phases.
///
/// Players may move only while `players_turn` is set. Clearing it hands the
/// turn to the enemies once neither `enemies_moving` nor `doing_setup` is
/// set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnState {
    /// Players may act.
    pub players_turn: bool,
    /// An enemy phase is in flight.
    pub enemies_moving: bool,
    /// A level is being set up.
    pub doing_setup: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            players_turn: true,
            enemies_moving: false,
            doing_setup: true,
        }
    }
}

impl TurnState {
    /// Whether an enemy phase should start now.
    #[must_use]
    pub const fn enemy_phase_due(&self) -> bool {
        !self.players_turn && !self.enemies_moving && !self.doing_setup
    }
}

/// Observable state of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Level card up; nobody acts.
    Setup,
    /// Players move; enemies wait.
    PlayerPhase,
    /// Enemies move in roster order.
    EnemyPhase,
    /// A team won; the level restarts shortly.
    LevelComplete,
    /// A player starved; the match is over.
    GameOver,
}

impl Phase {
    /// Whether bodies move, fire and score in this phase.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::PlayerPhase | Self::EnemyPhase)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::PlayerPhase => "player phase",
            Self::EnemyPhase => "enemy phase",
            Self::LevelComplete => "level complete",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}
