//! Drives an [`ArenaMatch`] with scripted input.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use egg_arena::{
    ArenaConfig, ArenaMatch, ArenaPlugin, CueLog, PadInput, SetupError, SlotBindings, StaticBoard,
};
use glam::Vec2;

/// A match, the cue log it reports to, and the pad it reads.
pub struct MatchHarness {
    /// The match under test.
    pub arena: ArenaMatch,
    /// Cues recorded since the last drain.
    pub cues: CueLog,
    /// Input read on the next tick.
    pub input: PadInput,
}

impl fmt::Debug for MatchHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchHarness")
            .field("phase", &self.arena.phase())
            .field("clock", &self.arena.clock())
            .field("level", &self.arena.level())
            .finish_non_exhaustive()
    }
}

impl MatchHarness {
    /// Builds a match on `config.board`.
    ///
    /// # Errors
    /// Returns the match's setup error.
    pub fn try_new(config: ArenaConfig, seed: u64) -> Result<Self, SetupError> {
        let cues = CueLog::new();
        let board = StaticBoard::new(config.board.clone());
        let arena = ArenaMatch::new(config, Box::new(board), Box::new(cues.clone()), seed)?;
        Ok(Self {
            arena,
            cues,
            input: PadInput::new(),
        })
    }

    /// Builds a match on `config.board`.
    ///
    /// # Panics
    /// Panics when the match cannot be set up.
    #[must_use]
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        Self::try_new(config, seed).unwrap_or_else(|e| panic!("match setup failed: {e}"))
    }

    /// Steps the match once and clears button presses.
    ///
    /// # Panics
    /// Panics when the step reports a setup error.
    pub fn tick(&mut self, dt: f32) {
        self.arena
            .step(dt, &self.input)
            .unwrap_or_else(|e| panic!("step failed: {e}"));
        self.input.clear_edges();
    }

    /// Steps the match `count` times.
    pub fn ticks(&mut self, count: usize, dt: f32) {
        for _ in 0..count {
            self.tick(dt);
        }
    }

    /// Ticks until `done` holds, at most `max_ticks` times.
    ///
    /// Returns whether `done` was reached.
    pub fn run_until(
        &mut self,
        dt: f32,
        max_ticks: usize,
        done: impl Fn(&ArenaMatch) -> bool,
    ) -> bool {
        for _ in 0..max_ticks {
            if done(&self.arena) {
                return true;
            }
            self.tick(dt);
        }
        done(&self.arena)
    }

    /// Holds the movement axes of `slot` at `direction`.
    pub fn hold(&mut self, slot: usize, direction: Vec2) {
        let bindings = bindings(slot);
        self.input.set_axis(&bindings.horizontal, direction.x);
        self.input.set_axis(&bindings.vertical, direction.y);
    }

    /// Centres the movement axes of `slot`.
    pub fn release(&mut self, slot: usize) {
        self.hold(slot, Vec2::ZERO);
    }

    /// Holds the aim axes of `slot` at `direction`.
    pub fn aim(&mut self, slot: usize, direction: Vec2) {
        let bindings = bindings(slot);
        self.input.set_axis(&bindings.horizontal_aim, direction.x);
        self.input.set_axis(&bindings.vertical_aim, direction.y);
    }

    /// Presses fire on `slot` for the next tick.
    pub fn fire(&mut self, slot: usize) {
        self.input.press(&bindings(slot).fire);
    }
}

fn bindings(slot: usize) -> SlotBindings {
    SlotBindings::for_slot(slot).unwrap_or_else(|| panic!("no input slot {slot}"))
}

/// A headless app running [`ArenaPlugin`] with a fixed frame time.
#[must_use]
pub fn plugin_app(config: ArenaConfig, seed: u64, frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .add_plugins(ArenaPlugin { config, seed });
    app
}
