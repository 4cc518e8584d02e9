//! Static placement of tiles, separators and the label.
//!
//! Digits flow left to right in groups of two. Groups are joined by a `:`
//! separator; the optional label sits above or below the row.

use flipclock_core::config::{CardSettings, LabelPosition};
use flipclock_core::digit::DigitPosition;

use crate::geometry::{Rect, Vec2};
use crate::theme::ResolvedStyle;

/// Space around the whole clock.
pub const CONTAINER_PADDING: f32 = 20.0;
/// Horizontal margin on each side of a separator.
pub const SEPARATOR_MARGIN: f32 = 8.0;
/// Vertical space between the label and the tile row.
pub const LABEL_GAP: f32 = 8.0;

/// Sizes derived from the card size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileMetrics {
    pub size: f32,
    pub tile_width: f32,
    pub gap: f32,
    pub radius: f32,
    pub glyph_size: f32,
    pub separator_size: f32,
    pub separator_width: f32,
    pub separator_offset: f32,
    pub label_size: f32,
}

impl TileMetrics {
    pub fn new(size: f32, radius_fraction: f64) -> Self {
        let separator_size = size * 0.6;
        Self {
            size,
            tile_width: size * 0.7,
            gap: size * 0.15,
            radius: size * radius_fraction as f32,
            glyph_size: size * 0.8,
            separator_size,
            // Advance width of a bold `:` is roughly a third of its em.
            separator_width: separator_size * 0.35,
            separator_offset: size * 0.1,
            label_size: size * 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockLayout {
    pub metrics: TileMetrics,
    tiles: Vec<(DigitPosition, Rect)>,
    separators: Vec<Rect>,
    label: Option<Rect>,
    bounds: Rect,
}

impl ClockLayout {
    pub fn compute(settings: &CardSettings, style: &ResolvedStyle) -> Self {
        let m = TileMetrics::new(settings.size, style.radius);
        let label_height = settings.label.as_ref().map(|_| m.label_size * 1.2);

        let row_top = match (label_height, settings.label_position) {
            (Some(h), LabelPosition::Top) => CONTAINER_PADDING + h + LABEL_GAP,
            _ => CONTAINER_PADDING,
        };

        let mut tiles = Vec::new();
        let mut separators = Vec::new();
        let mut x = CONTAINER_PADDING;
        let mut last_group = None;
        for &position in settings.clock.positions() {
            match last_group {
                Some(g) if g == position.group() => x += m.gap,
                Some(_) => {
                    x += SEPARATOR_MARGIN;
                    separators.push(Rect::new(
                        x,
                        row_top + m.separator_offset,
                        m.separator_width,
                        m.size - m.separator_offset,
                    ));
                    x += m.separator_width + SEPARATOR_MARGIN;
                }
                None => {}
            }
            tiles.push((position, Rect::new(x, row_top, m.tile_width, m.size)));
            x += m.tile_width;
            last_group = Some(position.group());
        }

        let row_width = x - CONTAINER_PADDING;
        let label = label_height.map(|h| {
            let y = match settings.label_position {
                LabelPosition::Top => CONTAINER_PADDING,
                LabelPosition::Bottom => row_top + m.size + LABEL_GAP,
            };
            Rect::new(CONTAINER_PADDING, y, row_width, h)
        });

        let content = tiles
            .iter()
            .map(|(_, r)| *r)
            .chain(label)
            .fold(Rect::new(CONTAINER_PADDING, row_top, 0.0, 0.0), Rect::union);
        let bounds = Rect::new(
            0.0,
            0.0,
            content.max().x + CONTAINER_PADDING,
            content.max().y + CONTAINER_PADDING,
        );

        Self { metrics: m, tiles, separators, label, bounds }
    }

    pub fn tile_rect(&self, position: DigitPosition) -> Option<Rect> {
        self.tiles.iter().find(|(p, _)| *p == position).map(|(_, r)| *r)
    }

    #[inline]
    pub fn tiles(&self) -> &[(DigitPosition, Rect)] {
        &self.tiles
    }

    #[inline]
    pub fn separators(&self) -> &[Rect] {
        &self.separators
    }

    #[inline]
    pub fn label(&self) -> Option<Rect> {
        self.label
    }

    /// Overall size including padding.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves everything by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        for (_, r) in &mut self.tiles {
            *r = r.translate(offset);
        }
        for r in &mut self.separators {
            *r = r.translate(offset);
        }
        self.label = self.label.map(|r| r.translate(offset));
        self.bounds = self.bounds.translate(offset);
    }
}
