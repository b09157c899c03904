//! Integration tests for vector math helpers.

use egg_arena::vec_normalize;
use egg_arena::vector_math::{decay_velocity, dominant_axis_step};
use glam::Vec2;

#[test]
fn normalize_returns_zero_for_nan() {
    let result = vec_normalize(Vec2::new(f32::NAN, 1.0));
    assert_eq!(result, Vec2::ZERO);
}

#[test]
fn normalize_returns_normalized_vector() {
    let result = vec_normalize(Vec2::new(3.0, 0.0));
    assert_eq!(result, Vec2::X);
}

#[test]
fn decay_never_reverses_direction() {
    assert_eq!(decay_velocity(Vec2::new(-0.05, 0.0), 0.1), Vec2::ZERO);
}

#[test]
fn dominant_axis_prefers_the_longer_offset() {
    assert_eq!(dominant_axis_step(Vec2::new(-4.0, 1.0)), Vec2::NEG_X);
    assert_eq!(dominant_axis_step(Vec2::new(0.5, 2.0)), Vec2::Y);
}
