//! Coordinate and geometry types shared between the scene and the
//! rasterizer.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Positive rotation is clockwise (a consequence of +Y down)

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
