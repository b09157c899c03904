//! Error types surfaced by match setup and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems that halt level initialisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A required scene marker was not supplied by the board.
    #[error("scene marker `{0}` is missing")]
    MissingMarker(String),
    /// A marker exists but has the wrong shape (area versus point).
    #[error("scene marker `{name}` must be {expected}")]
    WrongMarkerShape {
        /// Marker name.
        name: String,
        /// Shape the match needs.
        expected: &'static str,
    },
    /// A player is bound to an input slot that does not exist.
    #[error("input slot {slot} is outside 0..{max}")]
    InvalidSlot {
        /// Offending slot.
        slot: usize,
        /// Number of slots available.
        max: usize,
    },
    /// Two players share one input slot.
    #[error("input slot {0} is bound to more than one player")]
    DuplicateSlot(usize),
    /// The board collaborator could not build the level.
    #[error("board setup failed for level {level}: {detail}")]
    Board {
        /// Level being built.
        level: u32,
        /// Collaborator-provided description.
        detail: String,
    },
}

/// Failures while reading an arena configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for [`crate::config::ArenaConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
}
