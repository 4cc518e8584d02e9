//! Geometry in logical pixels.
//!
//! - Origin top-left
//! - +X right, +Y down
//!
//! A tile's hinge is the horizontal line through its middle; animated faces
//! rotate about it.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
