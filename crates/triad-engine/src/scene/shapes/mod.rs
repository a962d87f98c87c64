pub(crate) mod circle;
pub(crate) mod polygon;

use crate::paint::Color;

pub use circle::CircleCmd;
pub use polygon::PolygonCmd;

/// Stroke drawn centered on a shape's path.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
