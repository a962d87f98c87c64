//! Rasterizer for `DrawCmd::Polygon`.

use crate::coords::{Rect, Transform, Vec2};
use crate::render::Pixmap;
use crate::scene::shapes::PolygonCmd;

use super::common::{device_bounds, fill_coverage, pixel_span, stroke_coverage};

/// Signed distance from `p` to the closed polygon outline: negative
/// inside (even-odd rule), positive outside.
fn signed_distance(p: Vec2, points: &[Vec2]) -> f32 {
    let mut dist = f32::INFINITY;
    let mut inside = false;

    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        dist = dist.min(p.distance_to_segment(a, b));

        // Even-odd crossing test against the edge's y-span.
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }

    if inside { -dist } else { dist }
}

pub(crate) fn render(cmd: &PolygonCmd, transform: &Transform, inverse: &Transform, pixmap: &mut Pixmap) {
    if cmd.points.len() < 3 {
        return;
    }

    let border_width = cmd.border.as_ref().map_or(0.0, |b| b.width);
    let margin = border_width * 0.5 + 1.0;
    let local = Rect::bounding(cmd.points.iter().copied()).inflated(margin);
    let Some((xs, ys)) = pixel_span(device_bounds(local, transform), pixmap) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            let device = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let local = inverse.apply(device);
            let signed_dist = signed_distance(local, &cmd.points);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, Paint};
    use crate::render::render;
    use crate::scene::DrawList;

    fn square(half: f32, center: Vec2) -> Vec<Vec2> {
        vec![
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ]
    }

    #[test]
    fn signed_distance_sign_matches_interior() {
        let pts = square(5.0, Vec2::new(0.0, 0.0));
        assert!(signed_distance(Vec2::zero(), &pts) < 0.0);
        assert!(signed_distance(Vec2::new(10.0, 0.0), &pts) > 0.0);
        assert!((signed_distance(Vec2::zero(), &pts) + 5.0).abs() < 1e-4);
    }

    #[test]
    fn filled_square_covers_interior_only() {
        let green = Color::from_straight(0.0, 1.0, 0.0, 1.0);
        let mut list = DrawList::new();
        list.push_polygon(square(6.0, Vec2::new(16.0, 16.0)), Paint::solid(green), None);

        let mut pm = Pixmap::new(32, 32, Color::white());
        render(&list, &mut pm);

        assert_eq!(pm.pixel(16, 16), green);
        assert_eq!(pm.pixel(30, 30), Color::white());
    }

    #[test]
    fn rotated_triangle_renders_under_its_transform() {
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        // Triangle pointing down in local space, drawn under a half-turn:
        // its tip ends up above the local origin in device space.
        let tip = vec![
            Vec2::new(-8.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(0.0, 12.0),
        ];

        let mut list = DrawList::new();
        list.with_transform(
            Transform::translation(Vec2::new(16.0, 16.0))
                * Transform::rotation(core::f32::consts::PI),
            |list| list.push_polygon(tip, Paint::solid(blue), None),
        );

        let mut pm = Pixmap::new(32, 32, Color::white());
        render(&list, &mut pm);

        // Just above the origin: inside the rotated triangle.
        assert_eq!(pm.pixel(16, 10), blue);
        // Same offset below: empty.
        assert_eq!(pm.pixel(16, 22), Color::white());
    }
}
