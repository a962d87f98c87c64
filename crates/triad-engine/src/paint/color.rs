/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Premultiplication keeps src-over blending a single multiply-add per
/// channel in the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// The preferred constructor for palette entries written as byte
    /// triples.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// This color scaled by a coverage factor in `[0, 1]`.
    ///
    /// Valid on premultiplied colors: scaling all four channels is the
    /// same as scaling alpha before premultiplication.
    #[inline]
    pub fn scaled(self, coverage: f32) -> Self {
        Self {
            r: self.r * coverage,
            g: self.g * coverage,
            b: self.b * coverage,
            a: self.a * coverage,
        }
    }

    /// Source-over composite of `self` on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let k = 1.0 - self.a;
        Color {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}
