use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Smallest rectangle covering all of `points`. Empty input yields a
    /// zero-area rect at the origin.
    pub fn bounding(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        };
        let (mut min, mut max) = (first, first);
        for p in iter {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Rect::from_min_max(min, max)
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { origin: min, size: max - min }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Grows the rect by `margin` on every side.
    #[inline]
    pub fn inflated(self, margin: f32) -> Self {
        Rect::from_min_max(
            self.min() - Vec2::new(margin, margin),
            self.max() + Vec2::new(margin, margin),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let min = Vec2::new(
            self.min().x.max(other.min().x),
            self.min().y.max(other.min().y),
        );
        let max = Vec2::new(
            self.max().x.min(other.max().x),
            self.max().y.min(other.max().y),
        );

        if max.x - min.x <= 0.0 || max.y - min.y <= 0.0 {
            None
        } else {
            Some(Rect::from_min_max(min, max))
        }
    }
}
