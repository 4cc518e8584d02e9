//! Retained tile board: the rendering side of one flip clock.

use flipclock_core::config::CardSettings;
use flipclock_core::digit::{DigitPosition, FlipSurface, FlipTile};

use crate::layout::ClockLayout;
use crate::theme::ResolvedStyle;
use crate::tile::Tile;

/// Owns one [`Tile`] per active digit plus the resolved style and layout of
/// the last mount.
#[derive(Debug, Clone)]
pub struct FlipBoard {
    tiles: Vec<Tile>,
    settings: CardSettings,
    style: ResolvedStyle,
    layout: ClockLayout,
    mounts: u64,
}

impl FlipBoard {
    /// An unmounted board. Tiles appear on the first [`FlipSurface::mount`].
    pub fn new() -> Self {
        let settings = CardSettings::default();
        let style = ResolvedStyle::resolve(&settings);
        let layout = ClockLayout::compute(&settings, &style);
        Self { tiles: Vec::new(), settings, style, layout, mounts: 0 }
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, position: DigitPosition) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.position() == position)
    }

    /// Mutable access for hosts that edit tiles directly (e.g. to drop a face).
    pub fn tile_entry(&mut self, position: DigitPosition) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.position() == position)
    }

    /// Removes a tile as if its element had been destroyed.
    pub fn detach_tile(&mut self, position: DigitPosition) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t.position() == position)?;
        log::debug!("tile {position} detached");
        Some(self.tiles.remove(index))
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        !self.tiles.is_empty()
    }

    #[inline]
    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    #[inline]
    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    #[inline]
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    #[inline]
    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }
}

impl Default for FlipBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipSurface for FlipBoard {
    fn mount(&mut self, settings: &CardSettings) {
        self.settings = settings.clone();
        self.style = ResolvedStyle::resolve(settings);
        self.layout = ClockLayout::compute(settings, &self.style);
        self.tiles = settings.clock.positions().iter().map(|&p| Tile::new(p)).collect();
        self.mounts += 1;
        log::debug!(
            "board mounted: {} tiles, theme {}, size {}",
            self.tiles.len(),
            settings.theme,
            settings.size
        );
    }

    fn unmount(&mut self) {
        self.tiles.clear();
    }

    fn tile_mut(&mut self, position: DigitPosition) -> Option<&mut dyn FlipTile> {
        self.tile_entry(position).map(|t| t as &mut dyn FlipTile)
    }
}
