//! Rasterizer for `DrawCmd::Circle`.

use crate::coords::{Rect, Transform, Vec2};
use crate::render::Pixmap;
use crate::scene::shapes::CircleCmd;

use super::common::{device_bounds, fill_coverage, pixel_span, stroke_coverage};

pub(crate) fn render(cmd: &CircleCmd, transform: &Transform, inverse: &Transform, pixmap: &mut Pixmap) {
    if cmd.radius <= 0.0 {
        return;
    }

    let border_width = cmd.border.as_ref().map_or(0.0, |b| b.width);
    let reach = cmd.radius + border_width * 0.5 + 1.0;
    let local = Rect::new(
        cmd.center.x - reach,
        cmd.center.y - reach,
        reach * 2.0,
        reach * 2.0,
    );
    let Some((xs, ys)) = pixel_span(device_bounds(local, transform), pixmap) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            let device = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let local = inverse.apply(device);
            let signed_dist = (local - cmd.center).length() - cmd.radius;

            // Fill first, stroke on top, as a canvas fill+stroke pair does.
            let fill = fill_coverage(signed_dist);
            if fill > 0.0 {
                pixmap.blend(x, y, cmd.paint.sample(local).scaled(fill));
            }

            if let Some(border) = &cmd.border {
                let stroke = stroke_coverage(signed_dist, border.width);
                if stroke > 0.0 {
                    pixmap.blend(x, y, border.color.scaled(stroke));
                }
            }
        }
    }
}
