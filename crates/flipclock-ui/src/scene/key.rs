/// Paint layer of a tile part. Higher layers cover lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Tile body with its shadow, separators, label.
    pub const BODY: ZIndex = ZIndex(0);
    /// Static halves.
    pub const STATIC: ZIndex = ZIndex(1);
    /// Folding decoy halves.
    pub const ANIMATED: ZIndex = ZIndex(10);
}

/// Layer first, then recording order. Field order drives the derived `Ord`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}
