use core::f32::consts::TAU;

use triad_cards::Card;
use triad_engine::coords::{Transform, Vec2};
use triad_engine::paint::{Color, Paint};
use triad_engine::scene::{Border, DrawList};

use crate::glyph::{Glyph, GLYPH_RADIUS};
use crate::palette;

/// Stroke width of the circular card outline.
pub const OUTLINE_WIDTH: f32 = 5.0;

/// Stroke width around each glyph.
pub const GLYPH_STROKE_WIDTH: f32 = 4.0;

/// Glyph ring radius as a fraction of the card radius (counts above one).
const RING_FACTOR: f32 = 0.45;

/// Rendering hint for the card outline. Not persisted anywhere; the
/// caller re-derives it per repaint.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum CardOutline {
    #[default]
    Normal,
    /// Part of a correctly picked triad.
    Correct,
    /// Part of a wrong pick.
    Wrong,
}

impl CardOutline {
    fn color(self) -> Color {
        match self {
            CardOutline::Normal => Color::from_srgb_u8(0x40, 0x40, 0x40, 255),
            CardOutline::Correct => Color::from_srgb_u8(64, 192, 64, 255),
            CardOutline::Wrong => Color::from_srgb_u8(64, 64, 240, 255),
        }
    }
}

/// Records one card onto the draw list: a circular outline at `center`,
/// then `amount_id + 1` glyphs arranged in a ring of radius
/// `0.45 * card_radius` (a single glyph sits at the center), the whole
/// group rotated by `angle`.
///
/// Stateless and idempotent; callers reissue it for every repaint.
pub fn draw_card(
    list: &mut DrawList,
    center: Vec2,
    card: &Card,
    angle: f32,
    card_radius: f32,
    outline: CardOutline,
) {
    list.push_circle_outline(center, card_radius, OUTLINE_WIDTH, outline.color());

    let hue = palette::hue(card.color_id);
    let paint = match card.fill_id % 3 {
        0 => Paint::solid(hue),
        1 => Paint::none(),
        _ => Paint::Pattern(palette::hatch(card.color_id)),
    };
    let border = Border::new(GLYPH_STROKE_WIDTH, hue);
    let glyph = Glyph::from_shape_id(card.shape_id);

    let amount = card.amount_id as usize + 1;
    let ring_radius = if amount == 1 { 0.0 } else { card_radius * RING_FACTOR };

    list.with_transform(
        Transform::translation(center) * Transform::rotation(angle),
        |list| {
            for i in 0..amount {
                let slot_angle = i as f32 * TAU / amount as f32;
                let slot = Transform::rotation(slot_angle)
                    * Transform::translation(Vec2::new(ring_radius, 0.0));
                list.with_transform(slot, |list| {
                    glyph.push(list, GLYPH_RADIUS, paint.clone(), border.clone());
                });
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use triad_engine::scene::DrawCmd;

    const CARD_RADIUS: f32 = 60.0;

    fn record(card: Card, angle: f32, outline: CardOutline) -> DrawList {
        let mut list = DrawList::new();
        draw_card(&mut list, Vec2::new(100.0, 100.0), &card, angle, CARD_RADIUS, outline);
        list
    }

    /// Device-space positions of the glyph origins, skipping the outline.
    fn glyph_positions(list: &DrawList) -> Vec<Vec2> {
        list.items()
            .iter()
            .skip(1)
            .map(|item| item.transform.apply(Vec2::zero()))
            .collect()
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    // ── glyph layout ──────────────────────────────────────────────────────

    #[test]
    fn single_glyph_sits_at_the_card_center() {
        let list = record(Card::from_id(0), 0.0, CardOutline::Normal);
        assert_eq!(list.items().len(), 2);
        let positions = glyph_positions(&list);
        assert!(close(positions[0], Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn three_glyphs_ring_at_120_degree_spacing() {
        // amount_id 2 → three glyphs.
        let card = Card::from_id(triad_cards::card_id(0, 2, 0, 0));
        let list = record(card, 0.0, CardOutline::Normal);
        assert_eq!(list.items().len(), 4);

        let center = Vec2::new(100.0, 100.0);
        let ring = CARD_RADIUS * 0.45;
        let positions = glyph_positions(&list);
        for (i, &pos) in positions.iter().enumerate() {
            let slot = i as f32 * TAU / 3.0;
            let expected = center + Vec2::new(slot.cos() * ring, slot.sin() * ring);
            assert!(close(pos, expected), "glyph {i}: {pos:?} != {expected:?}");
            assert!(((pos - center).length() - ring).abs() < 1e-3);
        }
    }

    #[test]
    fn global_angle_rotates_the_ring() {
        let card = Card::from_id(triad_cards::card_id(0, 1, 0, 0));
        let angle = 0.7;
        let list = record(card, angle, CardOutline::Normal);

        let center = Vec2::new(100.0, 100.0);
        let ring = CARD_RADIUS * 0.45;
        let positions = glyph_positions(&list);
        let expected = center + Vec2::new(angle.cos() * ring, angle.sin() * ring);
        assert!(close(positions[0], expected));
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_is_an_unfilled_circle_in_the_state_color() {
        let list = record(Card::from_id(0), 0.0, CardOutline::Correct);
        let DrawCmd::Circle(outline) = &list.items()[0].cmd else {
            panic!("first command is not the outline circle");
        };
        assert_eq!(outline.radius, CARD_RADIUS);
        assert_eq!(outline.paint, Paint::none());
        let border = outline.border.as_ref().unwrap();
        assert_eq!(border.width, OUTLINE_WIDTH);
        assert_eq!(border.color, Color::from_srgb_u8(64, 192, 64, 255));
    }

    #[test]
    fn outline_states_use_distinct_colors() {
        assert_ne!(CardOutline::Normal.color(), CardOutline::Correct.color());
        assert_ne!(CardOutline::Correct.color(), CardOutline::Wrong.color());
    }

    // ── fill styles ───────────────────────────────────────────────────────

    fn first_glyph_paint(fill_id: u8) -> Paint {
        let card = Card::from_id(triad_cards::card_id(1, 0, 0, fill_id));
        let list = record(card, 0.0, CardOutline::Normal);
        match &list.items()[1].cmd {
            DrawCmd::Circle(c) => c.paint.clone(),
            DrawCmd::Polygon(p) => p.paint.clone(),
        }
    }

    #[test]
    fn fill_zero_is_solid_in_the_card_hue() {
        assert_eq!(first_glyph_paint(0), Paint::solid(palette::hue(1)));
    }

    #[test]
    fn fill_one_is_transparent() {
        assert_eq!(first_glyph_paint(1), Paint::none());
    }

    #[test]
    fn fill_two_reuses_the_shared_hatch_pattern() {
        let Paint::Pattern(pattern) = first_glyph_paint(2) else {
            panic!("fill 2 is not a pattern");
        };
        assert!(Arc::ptr_eq(&pattern, &palette::hatch(1)));
    }

    // ── shape selection ───────────────────────────────────────────────────

    #[test]
    fn shape_id_selects_circle_triangle_pentagon() {
        for (shape_id, want_points) in [(0u8, None), (1, Some(3)), (2, Some(5))] {
            let card = Card::from_id(triad_cards::card_id(0, 0, shape_id, 0));
            let list = record(card, 0.0, CardOutline::Normal);
            let got = match &list.items()[1].cmd {
                DrawCmd::Circle(_) => None,
                DrawCmd::Polygon(p) => Some(p.points.len()),
            };
            assert_eq!(got, want_points, "shape_id {shape_id}");
        }
    }

    #[test]
    fn glyphs_are_stroked_in_the_card_hue() {
        let card = Card::from_id(triad_cards::card_id(2, 0, 1, 1));
        let list = record(card, 0.0, CardOutline::Normal);
        let DrawCmd::Polygon(p) = &list.items()[1].cmd else {
            panic!("expected a triangle");
        };
        let border = p.border.as_ref().unwrap();
        assert_eq!(border.width, GLYPH_STROKE_WIDTH);
        assert_eq!(border.color, palette::hue(2));
    }

    // ── transform discipline ──────────────────────────────────────────────

    #[test]
    fn draw_leaves_the_transform_stack_balanced() {
        let mut list = DrawList::new();
        draw_card(
            &mut list,
            Vec2::zero(),
            &Card::from_id(80),
            1.2,
            40.0,
            CardOutline::Wrong,
        );
        assert_eq!(list.current_transform(), Transform::IDENTITY);
    }
}
