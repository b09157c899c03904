//! Utility helpers for tests.
//!
//! [`layout`] builds small boards and configs, [`harness`] drives a match
//! tick by tick with scripted input.

pub mod harness;
pub mod layout;

pub use harness::{plugin_app, MatchHarness};
pub use layout::{open_board, quick_config, seat};

use glam::Vec2;

/// Default tick used by scenario tests, in seconds.
pub const TICK: f32 = 1.0 / 60.0;

/// Assert that `actual` is within `tolerance` of `expected` on both axes.
///
/// # Panics
/// Panics with both vectors in the message when they differ.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {expected}, observed {actual} (tolerance {tolerance})"
    );
}
