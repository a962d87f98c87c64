//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - carry the canvas-style transform stack commands are recorded under
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
