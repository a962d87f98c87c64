//! Paint model shared between the scene and the rasterizer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, repeating hatch patterns)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod pattern;

use std::sync::Arc;

use crate::coords::Vec2;

pub use color::Color;
pub use pattern::HatchPattern;

/// Paint source for filling geometry.
///
/// Patterns are shared via `Arc`: build one tile per color up front and
/// clone the handle into every draw command that uses it.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Pattern(Arc<HatchPattern>),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Fully transparent fill (outline-only shapes).
    #[inline]
    pub fn none() -> Self {
        Paint::Solid(Color::transparent())
    }

    /// Resolves the paint at a point in shape-local space.
    #[inline]
    pub fn sample(&self, local: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Pattern(p) => p.sample(local),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
