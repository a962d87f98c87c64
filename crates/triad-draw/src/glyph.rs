use triad_engine::coords::Vec2;
use triad_engine::paint::Paint;
use triad_engine::scene::{Border, DrawList};

/// Radius of one glyph in logical pixels, independent of the card radius.
pub const GLYPH_RADIUS: f32 = 15.0;

/// The shape drawn on a card face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Glyph {
    Circle,
    Triangle,
    Pentagon,
}

impl Glyph {
    /// Maps a card's `shape_id` to its glyph. Out-of-range values wrap.
    #[inline]
    pub fn from_shape_id(shape_id: u8) -> Self {
        match shape_id % 3 {
            0 => Glyph::Circle,
            1 => Glyph::Triangle,
            _ => Glyph::Pentagon,
        }
    }

    /// Records this glyph at the local origin, filled and stroked.
    pub fn push(self, list: &mut DrawList, radius: f32, paint: Paint, border: Border) {
        match self {
            Glyph::Circle => list.push_circle(Vec2::zero(), radius, paint, Some(border)),
            Glyph::Triangle => {
                // Flat top edge, tip pointing down (+Y).
                let points = vec![
                    Vec2::new(-1.3 * radius, 0.0),
                    Vec2::new(1.3 * radius, 0.0),
                    Vec2::new(0.0, 1.6 * radius),
                ];
                list.push_polygon(points, paint, Some(border));
            }
            Glyph::Pentagon => {
                let points = vec![
                    Vec2::new(-radius, -0.6 * radius),
                    Vec2::new(0.5 * radius, -1.0 * radius),
                    Vec2::new(1.4 * radius, 0.0),
                    Vec2::new(0.5 * radius, 1.0 * radius),
                    Vec2::new(-radius, 0.6 * radius),
                ];
                list.push_polygon(points, paint, Some(border));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triad_engine::scene::DrawCmd;

    #[test]
    fn shape_ids_map_to_the_closed_enumeration() {
        assert_eq!(Glyph::from_shape_id(0), Glyph::Circle);
        assert_eq!(Glyph::from_shape_id(1), Glyph::Triangle);
        assert_eq!(Glyph::from_shape_id(2), Glyph::Pentagon);
        assert_eq!(Glyph::from_shape_id(5), Glyph::Pentagon);
    }

    #[test]
    fn polygon_glyphs_have_the_expected_vertex_counts() {
        let border = Border::new(1.0, triad_engine::paint::Color::white());
        let mut list = DrawList::new();
        Glyph::Triangle.push(&mut list, GLYPH_RADIUS, Paint::none(), border.clone());
        Glyph::Pentagon.push(&mut list, GLYPH_RADIUS, Paint::none(), border);

        match (&list.items()[0].cmd, &list.items()[1].cmd) {
            (DrawCmd::Polygon(tri), DrawCmd::Polygon(pent)) => {
                assert_eq!(tri.points.len(), 3);
                assert_eq!(pent.points.len(), 5);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }
}
