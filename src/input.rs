//! Raw input polling.
//!
//! Each player reads one of four slots. Slot 0 uses the bare axis names and
//! slots 1 to 3 append their number, so slot 2 fires with `Fire2`.

use hashbrown::{HashMap, HashSet};

use crate::constants::INPUT_SLOTS;

/// Source of raw axis and button state.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Unsmoothed axis value in `-1..=1`; unknown axes read zero.
    fn axis_raw(&self, name: &str) -> f32;
    /// Whether the named button went down this frame.
    fn button_down(&self, name: &str) -> bool;
}

/// Axis and button names bound to one input slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotBindings {
    /// Horizontal movement axis.
    pub horizontal: String,
    /// Vertical movement axis.
    pub vertical: String,
    /// Horizontal aim axis.
    pub horizontal_aim: String,
    /// Vertical aim axis.
    pub vertical_aim: String,
    /// Primary fire button.
    pub fire: String,
}

impl SlotBindings {
    /// Bindings for `slot`, or `None` when the slot does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::input::SlotBindings;
    /// let second = SlotBindings::for_slot(1).unwrap();
    /// assert_eq!(second.fire, "Fire1");
    /// assert_eq!(SlotBindings::for_slot(0).unwrap().horizontal, "Horizontal");
    /// assert!(SlotBindings::for_slot(4).is_none());
    /// ```
    #[must_use]
    pub fn for_slot(slot: usize) -> Option<Self> {
        if slot >= INPUT_SLOTS {
            return None;
        }
        let suffix = if slot == 0 {
            String::new()
        } else {
            slot.to_string()
        };
        Some(Self {
            horizontal: format!("Horizontal{suffix}"),
            vertical: format!("Vertical{suffix}"),
            horizontal_aim: format!("HorizontalAim{suffix}"),
            vertical_aim: format!("VerticalAim{suffix}"),
            fire: format!("Fire{suffix}"),
        })
    }
}

/// In-memory input state, written by a host or a bot and read by the match.
///
/// Axis values persist until changed; button presses are edge-triggered and
/// cleared by [`PadInput::clear_edges`] after each tick.
#[derive(Clone, Debug, Default)]
pub struct PadInput {
    axes: HashMap<String, f32>,
    pressed: HashSet<String>,
}

impl PadInput {
    /// Creates an input with every axis at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an axis, clamped to `-1..=1`.
    pub fn set_axis(&mut self, name: &str, value: f32) {
        self.axes.insert(name.to_owned(), value.clamp(-1.0, 1.0));
    }

    /// Registers a button press for the current frame.
    pub fn press(&mut self, name: &str) {
        self.pressed.insert(name.to_owned());
    }

    /// Forgets this frame's button presses.
    pub fn clear_edges(&mut self) {
        self.pressed.clear();
    }

    /// Returns every axis to zero and forgets presses.
    pub fn reset(&mut self) {
        self.axes.clear();
        self.pressed.clear();
    }
}

impl InputSource for PadInput {
    fn axis_raw(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }

    fn button_down(&self, name: &str) -> bool {
        self.pressed.contains(name)
    }
}
