/// Per-corner radii (logical pixels), clockwise from top-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Rounded on the top edge only (upper half of a tile).
    #[inline]
    pub const fn top(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: 0.0, bottom_left: 0.0 }
    }

    /// Rounded on the bottom edge only (lower half of a tile).
    #[inline]
    pub const fn bottom(r: f32) -> Self {
        Self { top_left: 0.0, top_right: 0.0, bottom_right: r, bottom_left: r }
    }
}
