//! Planar geometry: rectangles, segment casts, and pooled guide lines.

mod line;
mod rect;

pub use line::{Line, LineGroup};
pub use rect::Rect;
