//! Teams and the per-level score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side a player belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Scores at the left base.
    Left,
    /// Scores at the right base.
    Right,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Goals scored by each team this level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameScore {
    /// Left team's goals.
    pub left: u32,
    /// Right team's goals.
    pub right: u32,
}

impl GameScore {
    /// Adds one goal for `team`.
    pub const fn award(&mut self, team: Team) {
        match team {
            Team::Left => self.left += 1,
            Team::Right => self.right += 1,
        }
    }

    /// Goals scored by `team`.
    #[must_use]
    pub const fn of(&self, team: Team) -> u32 {
        match team {
            Team::Left => self.left,
            Team::Right => self.right,
        }
    }

    /// First team at or above `target`, checking left before right.
    #[must_use]
    pub const fn leader_at(&self, target: u32) -> Option<Team> {
        if self.left >= target {
            Some(Team::Left)
        } else if self.right >= target {
            Some(Team::Right)
        } else {
            None
        }
    }

    /// Clears both counters.
    pub const fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Left: {}  Right: {}", self.left, self.right)
    }
}
