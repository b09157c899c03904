//! Identifiers shared between the movers, the collision query and the match.
//! Bodies are addressed by roster position rather than by pointer so the
//! coordinator can hand out disjoint borrows.

use std::fmt;

/// Reference to a moving body owned by the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRef {
    /// Player by index into the match's player list.
    Player(usize),
    /// Enemy by index into the enemy roster.
    Enemy(usize),
    /// The single egg.
    Egg,
}

impl fmt::Display for BodyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(i) => write!(f, "player#{i}"),
            Self::Enemy(i) => write!(f, "enemy#{i}"),
            Self::Egg => f.write_str("egg"),
        }
    }
}

/// Anything a movement cast can be stopped by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blocker {
    /// Wall by index into the board's wall list.
    Wall(usize),
    /// Another moving body.
    Body(BodyRef),
}

/// Coarse category of a [`Blocker`], used to match movers with the things
/// they can interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockerKind {
    /// A destructible wall.
    Wall,
    /// A player.
    Player,
    /// An enemy.
    Enemy,
    /// The egg.
    Egg,
}

impl Blocker {
    /// Category of this blocker.
    #[must_use]
    pub const fn kind(&self) -> BlockerKind {
        match self {
            Self::Wall(_) => BlockerKind::Wall,
            Self::Body(BodyRef::Player(_)) => BlockerKind::Player,
            Self::Body(BodyRef::Enemy(_)) => BlockerKind::Enemy,
            Self::Body(BodyRef::Egg) => BlockerKind::Egg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Blocker::Wall(3), BlockerKind::Wall)]
    #[case(Blocker::Body(BodyRef::Player(0)), BlockerKind::Player)]
    #[case(Blocker::Body(BodyRef::Enemy(1)), BlockerKind::Enemy)]
    #[case(Blocker::Body(BodyRef::Egg), BlockerKind::Egg)]
    fn blocker_kinds(#[case] blocker: Blocker, #[case] kind: BlockerKind) {
        assert_eq!(blocker.kind(), kind);
    }

    #[rstest]
    fn body_refs_display_for_logs() {
        assert_eq!(BodyRef::Player(2).to_string(), "player#2");
        assert_eq!(BodyRef::Egg.to_string(), "egg");
    }
}
