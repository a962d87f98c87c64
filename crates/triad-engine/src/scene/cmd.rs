use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polygon::PolygonCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching rasterizer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Polygon(PolygonCmd),
}
