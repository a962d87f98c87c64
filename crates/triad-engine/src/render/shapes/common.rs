//! Shared helpers used by all shape rasterizers.

use crate::coords::{Rect, Transform, Vec2};
use crate::render::Pixmap;

/// Device-space bounding rect of a local-space rect under `transform`.
pub(super) fn device_bounds(local: Rect, transform: &Transform) -> Rect {
    let min = local.min();
    let max = local.max();
    Rect::bounding([
        transform.apply(min),
        transform.apply(Vec2::new(max.x, min.y)),
        transform.apply(max),
        transform.apply(Vec2::new(min.x, max.y)),
    ])
}

/// Integer pixel ranges covered by `bounds`, clamped to the pixmap.
///
/// Returns `None` when the shape lies entirely off-surface.
pub(super) fn pixel_span(
    bounds: Rect,
    pixmap: &Pixmap,
) -> Option<(core::ops::Range<usize>, core::ops::Range<usize>)> {
    let x0 = bounds.min().x.floor().max(0.0) as usize;
    let y0 = bounds.min().y.floor().max(0.0) as usize;
    let x1 = (bounds.max().x.ceil().max(0.0) as usize).min(pixmap.width());
    let y1 = (bounds.max().y.ceil().max(0.0) as usize).min(pixmap.height());

    if x0 >= x1 || y0 >= y1 {
        None
    } else {
        Some((x0..x1, y0..y1))
    }
}

/// Fill coverage for a signed distance to the shape edge (negative inside),
/// with ~1 px anti-aliasing.
#[inline]
pub(super) fn fill_coverage(signed_dist: f32) -> f32 {
    (0.5 - signed_dist).clamp(0.0, 1.0)
}

/// Stroke coverage for a path-centered stroke of width `width` at a signed
/// distance from the path.
#[inline]
pub(super) fn stroke_coverage(signed_dist: f32, width: f32) -> f32 {
    (width * 0.5 - signed_dist.abs() + 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_bounds_covers_rotated_rect() {
        let local = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let t = Transform::translation(Vec2::new(10.0, 10.0))
            * Transform::rotation(core::f32::consts::FRAC_PI_4);
        let b = device_bounds(local, &t);
        // A unit square rotated 45° spans ±√2 around its center.
        let half = 2.0f32.sqrt();
        assert!((b.min().x - (10.0 - half)).abs() < 1e-3);
        assert!((b.max().y - (10.0 + half)).abs() < 1e-3);
    }

    #[test]
    fn coverage_is_full_deep_inside_and_zero_far_outside() {
        assert_eq!(fill_coverage(-5.0), 1.0);
        assert_eq!(fill_coverage(5.0), 0.0);
        assert_eq!(stroke_coverage(0.0, 4.0), 1.0);
        assert_eq!(stroke_coverage(5.0, 4.0), 0.0);
    }
}
