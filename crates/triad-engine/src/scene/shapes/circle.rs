use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Circle draw payload. `center` and `radius` are in the local space of
/// the transform active when the command is pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, border: Option<Border>) -> Self {
        Self { center, radius, paint, border }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, paint.into(), border)));
    }

    /// Records an unfilled circle outline.
    #[inline]
    pub fn push_circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push_circle(center, radius, Paint::none(), Some(Border::new(width, color)));
    }
}
