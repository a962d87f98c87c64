use crate::coords::Vec2;

use super::Color;

/// Side length of the repeating hatch tile, in pixels.
const TILE: u32 = 6;

/// Stroke width of the hatch lines.
const LINE_WIDTH: f32 = 1.0;

/// A small square tile of diagonal hatching, rasterized once and sampled
/// with repeat wrapping.
///
/// The tile holds two parallel diagonal strokes (offset by one tile width
/// so the pattern tiles seamlessly) plus a quarter-circle arc stroke, all
/// in a single color. Build one per color up front and share it; sampling
/// is a table lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchPattern {
    size: u32,
    texels: Vec<Color>,
}

impl HatchPattern {
    /// Rasterizes the diagonal-hatch tile in `color`.
    pub fn diagonal(color: Color) -> Self {
        let w = TILE as f32;
        let half = LINE_WIDTH * 0.5;

        // Two diagonals, one tile width apart, running min-corner to
        // max-corner so the pattern wraps without seams.
        let strokes = [
            (Vec2::new(-0.5 * w, 0.0), Vec2::new(0.5 * w, w)),
            (Vec2::new(0.5 * w, 0.0), Vec2::new(1.5 * w, w)),
        ];
        // Quarter arc around the tile origin, radius far outside the tile;
        // kept for parity with the source pattern it reproduces.
        let arc_radius = 50.0;

        let mut texels = Vec::with_capacity((TILE * TILE) as usize);
        for py in 0..TILE {
            for px in 0..TILE {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);

                let mut dist = f32::INFINITY;
                for (a, b) in strokes {
                    dist = dist.min(p.distance_to_segment(a, b));
                }
                dist = dist.min((p.length() - arc_radius).abs());

                // ~1 px analytic anti-aliasing on the stroke edge.
                let coverage = (half - dist + 0.5).clamp(0.0, 1.0);
                texels.push(color.scaled(coverage));
            }
        }

        Self { size: TILE, texels }
    }

    /// Samples the tile at a point, wrapping in both axes.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        let ix = (p.x.floor() as i64).rem_euclid(self.size as i64) as usize;
        let iy = (p.y.floor() as i64).rem_euclid(self.size as i64) as usize;
        self.texels[iy * self.size as usize + ix]
    }
}
