use core::ops::Mul;

use super::Vec2;

/// 2D affine transform (column-major 2×2 matrix plus translation).
///
/// Maps a point `p` to `m · p + t`. The draw list composes these the way a
/// canvas composes `translate`/`rotate` calls; the rasterizer runs the
/// [`inverse`](Self::inverse) to evaluate shapes in their local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// First matrix column (image of the +X axis).
    pub x_axis: Vec2,
    /// Second matrix column (image of the +Y axis).
    pub y_axis: Vec2,
    pub translation: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x_axis: Vec2::new(1.0, 0.0),
        y_axis: Vec2::new(0.0, 1.0),
        translation: Vec2::new(0.0, 0.0),
    };

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self {
            x_axis: Vec2::new(1.0, 0.0),
            y_axis: Vec2::new(0.0, 1.0),
            translation: offset,
        }
    }

    /// Rotation by `angle` radians. Positive is clockwise in the +Y-down
    /// coordinate space.
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x_axis: Vec2::new(cos, sin),
            y_axis: Vec2::new(-sin, cos),
            translation: Vec2::zero(),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.x_axis * p.x + self.y_axis * p.y + self.translation
    }

    /// Composes so that `self` is applied first, then `outer` — matching a
    /// canvas where the outermost transform is pushed first.
    #[inline]
    pub fn then(&self, outer: &Transform) -> Transform {
        Transform {
            x_axis: outer.x_axis * self.x_axis.x + outer.y_axis * self.x_axis.y,
            y_axis: outer.x_axis * self.y_axis.x + outer.y_axis * self.y_axis.y,
            translation: outer.apply(self.translation),
        }
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn det(&self) -> f32 {
        self.x_axis.cross(self.y_axis)
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Transform> {
        let det = self.det();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv_det = 1.0 / det;
        let x_axis = Vec2::new(self.y_axis.y * inv_det, -self.x_axis.y * inv_det);
        let y_axis = Vec2::new(-self.y_axis.x * inv_det, self.x_axis.x * inv_det);
        let translation = -(x_axis * self.translation.x + y_axis * self.translation.y);
        Some(Transform { x_axis, y_axis, translation })
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x_axis.is_finite() && self.y_axis.is_finite() && self.translation.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `outer * inner` applies `inner` first (matrix convention).
impl Mul for Transform {
    type Output = Transform;
    #[inline]
    fn mul(self, inner: Transform) -> Transform {
        inner.then(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let p = Vec2::new(3.0, -2.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn translation_offsets_points() {
        let t = Transform::translation(Vec2::new(5.0, 7.0));
        assert_eq!(t.apply(Vec2::zero()), Vec2::new(5.0, 7.0));
    }

    #[test]
    fn quarter_turn_maps_x_axis_down() {
        // +Y down, positive rotation clockwise: +X rotates to +Y.
        let t = Transform::rotation(core::f32::consts::FRAC_PI_2);
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn mul_applies_rightmost_first() {
        // Translate, then rotate the translated point.
        let t = Transform::rotation(core::f32::consts::PI)
            * Transform::translation(Vec2::new(1.0, 0.0));
        assert!(close(t.apply(Vec2::zero()), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn canvas_order_translate_then_rotate() {
        // translate(10,0) pushed first, rotate 90° pushed second: local
        // origin lands at the translation, local +X points down.
        let t = Transform::translation(Vec2::new(10.0, 0.0))
            * Transform::rotation(core::f32::consts::FRAC_PI_2);
        assert!(close(t.apply(Vec2::zero()), Vec2::new(10.0, 0.0)));
        assert!(close(t.apply(Vec2::new(2.0, 0.0)), Vec2::new(10.0, 2.0)));
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform::translation(Vec2::new(4.0, -3.0))
            * Transform::rotation(0.7);
        let inv = t.inverse().unwrap();
        let p = Vec2::new(1.5, 2.5);
        assert!(close(inv.apply(t.apply(p)), p));
        assert!(close(t.apply(inv.apply(p)), p));
    }
}
