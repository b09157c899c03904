//! Level layouts and the collaborator that builds them.
//!
//! A board is described by named markers plus walls and enemy spawns. The
//! match resolves the markers it needs into a [`SceneRefs`] once per level so
//! nothing looks objects up by name afterwards.

use glam::Vec2;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::geometry::Rect;
use crate::wall::Wall;

/// Marker naming the playable area; bodies outside it die.
pub const BACKGROUND: &str = "background";
/// Marker naming the area bodies respawn in.
pub const SAFE_ZONE: &str = "RespawnSafeZone";
/// Marker naming the left team's scoring base.
pub const LEFT_BASE: &str = "LeftBase";
/// Marker naming the right team's scoring base.
pub const RIGHT_BASE: &str = "RightBase";
/// Marker naming the egg's starting point.
pub const EGG: &str = "Egg";

/// A named location on the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// A rectangle.
    Area(Rect),
    /// A single point.
    Point(Vec2),
}

impl Marker {
    /// Point this marker stands for; areas use their centre.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        match self {
            Self::Area(rect) => rect.centre(),
            Self::Point(point) => *point,
        }
    }
}

/// Everything a board collaborator produces for one level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Named markers.
    pub markers: HashMap<String, Marker>,
    /// Destructible walls.
    pub walls: Vec<Wall>,
    /// Enemy spawn points, in roster order.
    pub enemies: Vec<Vec2>,
}

impl BoardLayout {
    /// Adds or replaces a marker.
    #[must_use]
    pub fn with_marker(mut self, name: &str, marker: Marker) -> Self {
        self.markers.insert(name.to_owned(), marker);
        self
    }

    /// Appends a wall.
    #[must_use]
    pub fn with_wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Appends an enemy spawn point.
    #[must_use]
    pub fn with_enemy(mut self, position: Vec2) -> Self {
        self.enemies.push(position);
        self
    }
}

/// Builds the board for a level.
#[cfg_attr(test, mockall::automock)]
pub trait BoardBuilder {
    /// Produces the layout of `level`.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] when the level cannot be built.
    fn setup_scene(&mut self, level: u32) -> Result<BoardLayout, SetupError>;
}

/// Board that serves the same layout for every level.
#[derive(Clone, Debug, Default)]
pub struct StaticBoard {
    layout: BoardLayout,
}

impl StaticBoard {
    /// Wraps `layout`.
    #[must_use]
    pub const fn new(layout: BoardLayout) -> Self {
        Self { layout }
    }
}

impl BoardBuilder for StaticBoard {
    fn setup_scene(&mut self, level: u32) -> Result<BoardLayout, SetupError> {
        log::debug!(
            "building level {level}: {} walls, {} enemies",
            self.layout.walls.len(),
            self.layout.enemies.len()
        );
        Ok(self.layout.clone())
    }
}

/// Markers resolved for the current level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRefs {
    /// Playable area.
    pub background: Rect,
    /// Respawn area.
    pub safe_zone: Rect,
    /// Left team's base.
    pub left_base: Vec2,
    /// Right team's base.
    pub right_base: Vec2,
    /// Egg start.
    pub egg_spawn: Vec2,
}

impl SceneRefs {
    /// Resolves every required marker in `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingMarker`] for an absent marker and
    /// [`SetupError::WrongMarkerShape`] when an area marker is given as a
    /// point.
    pub fn resolve(layout: &BoardLayout) -> Result<Self, SetupError> {
        Ok(Self {
            background: area(layout, BACKGROUND)?,
            safe_zone: area(layout, SAFE_ZONE)?,
            left_base: point(layout, LEFT_BASE)?,
            right_base: point(layout, RIGHT_BASE)?,
            egg_spawn: point(layout, EGG)?,
        })
    }
}

fn marker<'a>(layout: &'a BoardLayout, name: &str) -> Result<&'a Marker, SetupError> {
    layout
        .markers
        .get(name)
        .ok_or_else(|| SetupError::MissingMarker(name.to_owned()))
}

fn area(layout: &BoardLayout, name: &str) -> Result<Rect, SetupError> {
    match marker(layout, name)? {
        Marker::Area(rect) => Ok(*rect),
        Marker::Point(_) => Err(SetupError::WrongMarkerShape {
            name: name.to_owned(),
            expected: "an area",
        }),
    }
}

fn point(layout: &BoardLayout, name: &str) -> Result<Vec2, SetupError> {
    marker(layout, name).map(Marker::anchor)
}
