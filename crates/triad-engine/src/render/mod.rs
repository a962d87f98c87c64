//! Software rasterizer for the scene command stream.
//!
//! Replays a [`DrawList`] into a [`Pixmap`] in paint order. Each shape
//! rasterizer inverse-maps candidate pixels into shape-local space and
//! evaluates analytic coverage there, so arbitrary affine transforms come
//! for free.

mod pixmap;

pub mod shapes;

use crate::scene::{DrawCmd, DrawList};

pub use pixmap::Pixmap;

/// Replays `list` into `pixmap`, back to front.
pub fn render(list: &DrawList, pixmap: &mut Pixmap) {
    for item in list.items() {
        let Some(inverse) = item.transform.inverse() else {
            // Degenerate transform collapses the shape to zero area.
            log::warn!("skipping draw command with singular transform");
            continue;
        };

        match &item.cmd {
            DrawCmd::Circle(cmd) => shapes::circle::render(cmd, &item.transform, &inverse, pixmap),
            DrawCmd::Polygon(cmd) => {
                shapes::polygon::render(cmd, &item.transform, &inverse, pixmap)
            }
        }
    }
}
