use std::sync::{Arc, OnceLock};

use triad_engine::paint::{Color, HatchPattern};

/// The three card hues as straight sRGB bytes: green, light blue, dark
/// blue, indexed by `color_id`.
pub const CARD_COLORS: [(u8, u8, u8); 3] = [(64, 192, 64), (64, 180, 240), (64, 64, 240)];

/// The hue for a card's `color_id`. Out-of-range values wrap.
pub fn hue(color_id: u8) -> Color {
    let (r, g, b) = CARD_COLORS[color_id as usize % CARD_COLORS.len()];
    Color::from_srgb_u8(r, g, b, 255)
}

/// The hatch pattern for a card's `color_id`. Out-of-range values wrap.
///
/// One tile per hue is rasterized on first use and shared by every draw
/// thereafter.
pub fn hatch(color_id: u8) -> Arc<HatchPattern> {
    static PATTERNS: OnceLock<[Arc<HatchPattern>; 3]> = OnceLock::new();
    let patterns = PATTERNS
        .get_or_init(|| [0, 1, 2].map(|i| Arc::new(HatchPattern::diagonal(hue(i)))));
    patterns[color_id as usize % patterns.len()].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hues_are_opaque_and_distinct() {
        for id in 0..3 {
            assert_eq!(hue(id).a, 1.0);
        }
        assert_ne!(hue(0), hue(1));
        assert_ne!(hue(1), hue(2));
    }

    #[test]
    fn out_of_range_ids_wrap() {
        assert_eq!(hue(3), hue(0));
        assert!(Arc::ptr_eq(&hatch(4), &hatch(1)));
    }

    #[test]
    fn patterns_are_built_once_and_shared() {
        assert!(Arc::ptr_eq(&hatch(0), &hatch(0)));
        assert!(!Arc::ptr_eq(&hatch(0), &hatch(2)));
    }
}
