//! Basic vector math helper functions.
//! Small helpers for normalising, decaying and orienting planar vectors.
use glam::Vec2;

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite and zero vectors normalise to [`Vec2::ZERO`].
///
/// # Examples
///
/// ```
/// use egg_arena::vec_normalize;
/// use glam::Vec2;
/// let n = vec_normalize(Vec2::new(3.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-6);
/// assert!((n.y - 0.8).abs() < 1e-6);
/// assert_eq!(vec_normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec2) -> Vec2 {
    if !vector.is_finite() {
        return Vec2::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Shrinks the magnitude of `velocity` by `decay`, keeping its direction.
///
/// The magnitude is clamped at zero so the result never flips direction.
///
/// # Examples
///
/// ```
/// use egg_arena::vector_math::decay_velocity;
/// use glam::Vec2;
/// let v = decay_velocity(Vec2::new(0.0, 2.0), 0.5);
/// assert!((v.y - 1.5).abs() < 1e-6);
/// assert_eq!(decay_velocity(Vec2::new(0.1, 0.0), 1.0), Vec2::ZERO);
/// ```
#[must_use]
pub fn decay_velocity(velocity: Vec2, decay: f32) -> Vec2 {
    let magnitude = (velocity.length() - decay).max(0.0);
    vec_normalize(velocity) * magnitude
}

/// Heading of `direction` in degrees, counter-clockwise from +X.
#[must_use]
pub fn heading_degrees(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x).to_degrees()
}

/// Snaps `direction` to the unit step along its dominant axis.
///
/// Ties favour the vertical axis; a zero vector stays zero.
///
/// # Examples
///
/// ```
/// use egg_arena::vector_math::dominant_axis_step;
/// use glam::Vec2;
/// assert_eq!(dominant_axis_step(Vec2::new(-3.0, 1.0)), Vec2::new(-1.0, 0.0));
/// assert_eq!(dominant_axis_step(Vec2::new(0.0, 0.0)), Vec2::ZERO);
/// ```
#[must_use]
pub fn dominant_axis_step(direction: Vec2) -> Vec2 {
    if direction.x.abs() > direction.y.abs() {
        Vec2::new(direction.x.signum(), 0.0)
    } else if direction.y != 0.0 {
        Vec2::new(0.0, direction.y.signum())
    } else {
        Vec2::ZERO
    }
}
