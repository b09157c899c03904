//! Bevy plugin driving an [`ArenaMatch`] from the app loop.
//!
//! The match is single-threaded and owns `Rc`-backed collaborators, so it is
//! stored as a non-send resource and stepped from one exclusive system.
//! Presentation cues recorded during a step are re-emitted as [`ArenaCue`]
//! events; setup failures surface as [`ArenaSetupError`] events that an
//! observer logs.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error};
use thiserror::Error;

use crate::arena::ArenaMatch;
use crate::board::StaticBoard;
use crate::config::ArenaConfig;
use crate::error::SetupError;
use crate::input::PadInput;
use crate::presentation::{Cue, CueLog};

/// Non-send resource holding the running match and its cue recorder.
pub struct ArenaState {
    /// The match.
    pub arena: ArenaMatch,
    /// Cues the match has emitted but the plugin has not yet forwarded.
    pub cues: CueLog,
}

/// Input the match reads on its next step.
///
/// Hosts and bots write axes and presses here; button presses are cleared
/// after every step.
#[derive(Resource, Default, Debug, Clone)]
pub struct ArenaInput(pub PadInput);

/// A presentation cue emitted by the match.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ArenaCue(pub Cue);

/// Event raised when the match cannot set up a level.
#[derive(Event, Debug, Clone, Error)]
#[error("arena setup failed: {0}")]
pub struct ArenaSetupError(pub SetupError);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_setup_error(event: On<ArenaSetupError>) {
    error!("{}", event.event());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_cue(event: On<ArenaCue>) {
    debug!("cue: {:?}", event.event().0);
}

/// Steps the match by the frame time and forwards its cues.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn step_arena_system(
    mut commands: Commands,
    time: Res<Time>,
    mut input: ResMut<ArenaInput>,
    mut state: NonSendMut<ArenaState>,
) {
    let ArenaState { arena, cues } = &mut *state;
    if let Err(err) = arena.step(time.delta_secs(), &input.0) {
        commands.trigger(ArenaSetupError(err));
    }
    for cue in cues.drain() {
        commands.trigger(ArenaCue(cue));
    }
    input.0.clear_edges();
}

/// Bevy plugin that builds a match from an [`ArenaConfig`] and steps it in
/// `Update`.
///
/// The board comes from the config's layout, served unchanged every level.
/// A roster or board error at build time is reported as an
/// [`ArenaSetupError`] and no systems are installed.
#[derive(Debug, Clone)]
pub struct ArenaPlugin {
    /// Match configuration.
    pub config: ArenaConfig,
    /// Seed for the match's random choices.
    pub seed: u64,
}

impl Default for ArenaPlugin {
    fn default() -> Self {
        Self {
            config: ArenaConfig::default(),
            seed: 0,
        }
    }
}

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_setup_error);
        app.add_observer(log_cue);
        app.init_resource::<ArenaInput>();

        let cues = CueLog::new();
        let board = StaticBoard::new(self.config.board.clone());
        let arena = match ArenaMatch::new(
            self.config.clone(),
            Box::new(board),
            Box::new(cues.clone()),
            self.seed,
        ) {
            Ok(arena) => arena,
            Err(err) => {
                app.world_mut().trigger(ArenaSetupError(err));
                return;
            }
        };
        app.world_mut()
            .insert_non_send_resource(ArenaState { arena, cues });
        app.add_systems(Update, step_arena_system);
    }
}
