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

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn translate(self, by: Vec2) -> Self {
        Self { origin: self.origin + by, size: self.size }
    }

    /// Top half, hinge on its bottom edge.
    #[inline]
    pub fn upper_half(self) -> Self {
        Rect::new(self.origin.x, self.origin.y, self.size.x, self.size.y * 0.5)
    }

    /// Bottom half, hinge on its top edge.
    #[inline]
    pub fn lower_half(self) -> Self {
        let h = self.size.y * 0.5;
        Rect::new(self.origin.x, self.origin.y + h, self.size.x, h)
    }

    /// Scales the height about the horizontal line `pivot_y`.
    ///
    /// Used to project a face rotated about the tile's hinge: the edge on
    /// the pivot stays put and the far edge moves towards it.
    pub fn scale_y_about(self, pivot_y: f32, factor: f32) -> Self {
        let factor = factor.max(0.0);
        let y0 = pivot_y + (self.origin.y - pivot_y) * factor;
        let y1 = pivot_y + (self.max().y - pivot_y) * factor;
        Rect::new(self.origin.x, y0.min(y1), self.size.x, (y1 - y0).abs())
    }

    /// Overlap of two rects, `None` if they only touch or are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Smallest rect containing both.
    pub fn union(self, other: Rect) -> Rect {
        let x0 = self.origin.x.min(other.origin.x);
        let y0 = self.origin.y.min(other.origin.y);
        let x1 = self.max().x.max(other.max().x);
        let y1 = self.max().y.max(other.max().y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}
