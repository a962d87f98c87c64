use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Closed polygon draw payload.
///
/// `points` are vertices in local space; the closing edge from the last
/// vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, paint: Paint, border: Option<Border>) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 vertices");
        Self { points, paint, border }
    }
}

impl DrawList {
    /// Records a closed polygon draw command.
    #[inline]
    pub fn push_polygon(
        &mut self,
        points: Vec<Vec2>,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.push(DrawCmd::Polygon(PolygonCmd::new(points, paint.into(), border)));
    }
}
