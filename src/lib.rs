#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the egg arena simulation.
//!
//! The core is engine-free: [`ArenaMatch`] is stepped with a frame time and
//! an [`InputSource`] and reports side effects through a [`Presenter`].
//! [`ArenaPlugin`] wraps it for a Bevy app.
pub mod arena;
pub mod board;
pub mod body;
pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod egg;
pub mod enemy;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod player;
pub mod plugin;
pub mod presentation;
pub mod projectile;
pub mod scheduler;
pub mod score;
pub mod turn;
pub mod vector_math;
pub mod wall;
pub use constants::*;

// Re-export commonly used items
pub use arena::ArenaMatch;
pub use board::{BoardBuilder, BoardLayout, Marker, SceneRefs, StaticBoard};
pub use body::{BodyTuning, Damageable, MoveOutcome, Mover, MovingBody, RespawnRule};
pub use collision::{CollisionQuery, Hit, Obstacles};
pub use components::{Blocker, BlockerKind, BodyRef};
pub use config::{ArenaConfig, PlayerSpec, TimingConfig};
pub use egg::Egg;
pub use enemy::{Enemy, EnemyTuning};
pub use error::{ConfigError, SetupError};
pub use geometry::{Line, LineGroup, Rect};
pub use input::{InputSource, PadInput, SlotBindings};
pub use logging::init as init_logging;
pub use player::{Controls, Launch, Player, PlayerTuning};
pub use plugin::{ArenaCue, ArenaInput, ArenaPlugin, ArenaSetupError, ArenaState};
pub use presentation::{AnimationCue, Cue, CueLog, Presenter, SilentPresenter, SoundClip};
pub use projectile::{ProjectileTuning, PushProjectile};
pub use score::{GameScore, Team};
pub use turn::{Phase, TurnState};
pub use vector_math::vec_normalize;
pub use wall::Wall;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use egg_arena::prelude::*;
    //! ```

    pub use crate::ArenaConfig;
    pub use crate::ArenaMatch;
    pub use crate::ArenaPlugin;
    pub use crate::CueLog;
    pub use crate::PadInput;
    pub use crate::Phase;
    pub use crate::StaticBoard;
    pub use crate::Team;
}
