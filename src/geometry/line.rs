//! Pooled line segments for aiming guides.
//!
//! A [`Line`] is a single segment that can be toggled on and off without
//! reallocating; a [`LineGroup`] owns a fixed pool of them and hands lines out
//! until the pool runs dry. Renderers read the active lines each frame.

use glam::Vec2;

use crate::vector_math::heading_degrees;

/// A drawable segment with a thickness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    start: Vec2,
    end: Vec2,
    thickness: f32,
    active: bool,
}

impl Line {
    /// Shows the line between `start` and `end`.
    pub const fn activate(&mut self, start: Vec2, end: Vec2, thickness: f32) {
        self.start = start;
        self.end = end;
        self.thickness = thickness;
        self.active = true;
    }

    /// Hides the line.
    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether the line is currently shown.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> Vec2 {
        self.start
    }

    /// End point.
    #[must_use]
    pub const fn end(&self) -> Vec2 {
        self.end
    }

    /// Thickness in world units.
    #[must_use]
    pub const fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Rotation a sprite needs to lie along the segment, in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        heading_degrees(self.end - self.start)
    }

    /// Centre of the segment, where a stretched sprite is placed.
    #[must_use]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// Fixed-size pool of [`Line`]s sharing a thickness.
#[derive(Clone, Debug)]
pub struct LineGroup {
    active: Vec<Line>,
    inactive: Vec<Line>,
    thickness: f32,
}

impl LineGroup {
    /// Creates a pool holding `max_segments` hidden lines.
    #[must_use]
    pub fn new(max_segments: usize, thickness: f32) -> Self {
        Self {
            active: Vec::with_capacity(max_segments),
            inactive: vec![Line::default(); max_segments],
            thickness,
        }
    }

    /// Thickness given to newly activated lines.
    #[must_use]
    pub const fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Changes the thickness used for subsequent activations.
    pub const fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    /// Activates one line from `start` to `end`.
    ///
    /// Returns `false` when the pool is exhausted; the request is dropped.
    pub fn activate_line(&mut self, start: Vec2, end: Vec2) -> bool {
        let Some(mut line) = self.inactive.pop() else {
            return false;
        };
        line.activate(start, end, self.thickness);
        self.active.push(line);
        true
    }

    /// Activates consecutive segments joining `points` in order.
    ///
    /// Fewer than two points draw nothing.
    pub fn activate_segments(&mut self, points: &[Vec2]) {
        for pair in points.windows(2) {
            if let [from, to] = pair {
                self.activate_line(*from, *to);
            }
        }
    }

    /// Returns every active line to the pool.
    pub fn deactivate_segments(&mut self) {
        while let Some(mut line) = self.active.pop() {
            line.deactivate();
            self.inactive.push(line);
        }
    }

    /// Lines currently shown.
    #[must_use]
    pub fn active_lines(&self) -> &[Line] {
        &self.active
    }

    /// Lines still available in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.inactive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    fn line_reports_sprite_transform() {
        let mut line = Line::default();
        line.activate(Vec2::ZERO, Vec2::new(0.0, 2.0), 0.2);
        assert!(line.is_active());
        assert_relative_eq!(line.length(), 2.0);
        assert_relative_eq!(line.rotation_degrees(), 90.0);
        assert_eq!(line.midpoint(), Vec2::new(0.0, 1.0));
        line.deactivate();
        assert!(!line.is_active());
    }

    #[rstest]
    fn segments_draw_from_pool_until_exhausted() {
        let mut group = LineGroup::new(2, 0.5);
        group.activate_segments(&[
            Vec2::ZERO,
            Vec2::X,
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert_eq!(group.active_lines().len(), 2);
        assert_eq!(group.available(), 0);
        assert!(group.active_lines().iter().all(|l| (l.thickness() - 0.5).abs() < 1e-6));
    }

    #[rstest]
    fn deactivate_returns_lines_to_pool() {
        let mut group = LineGroup::new(3, 0.1);
        assert!(group.activate_line(Vec2::ZERO, Vec2::Y));
        group.deactivate_segments();
        assert!(group.active_lines().is_empty());
        assert_eq!(group.available(), 3);
    }

    #[rstest]
    fn single_point_draws_nothing() {
        let mut group = LineGroup::new(1, 0.1);
        group.activate_segments(&[Vec2::ONE]);
        assert!(group.active_lines().is_empty());
    }
}
