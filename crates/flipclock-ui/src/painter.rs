//! Records a [`FlipBoard`] into a [`DrawList`].

use std::time::Instant;

use flipclock_core::digit::{DigitPosition, FaceSlot, FlipFrame};
use flipclock_core::tick::TickOrchestrator;

use crate::board::FlipBoard;
use crate::color::Color;
use crate::geometry::{CornerRadii, Rect, Vec2};
use crate::scene::{Border, DrawCmd, DrawList, GlyphCmd, LineCmd, PanelCmd, TextCmd, ZIndex};
use crate::theme::{effect, ResolvedStyle};
use crate::tile::Tile;

/// Thickness of the hinge line drawn under each upper half.
const HINGE_LINE_WIDTH: f32 = 1.0;
const BORDER_WIDTH: f32 = 1.0;

/// Paints tiles, separators and the label.
///
/// Per tile, back to front:
/// - `BODY`: the full tile with its shadow
/// - `STATIC`: both static halves, each clipped to its half
/// - `ANIMATED`: both decoy halves, squashed towards the hinge by the cosine
///   of their rotation
pub struct FlipPainter<'a> {
    list: &'a mut DrawList,
    board: &'a FlipBoard,
    style: &'a ResolvedStyle,
    font_size: f32,
    radius: f32,
}

impl<'a> FlipPainter<'a> {
    pub fn new(list: &'a mut DrawList, board: &'a FlipBoard) -> Self {
        let metrics = board.layout().metrics;
        Self {
            list,
            board,
            style: board.style(),
            font_size: metrics.glyph_size,
            radius: metrics.radius,
        }
    }

    /// Paints the whole board at `now`, taking each tile's rotation from the
    /// matching cell of `orchestrator`.
    pub fn paint(&mut self, orchestrator: &TickOrchestrator, now: Instant) {
        self.paint_with(|position| {
            orchestrator
                .cell(position)
                .map(|c| c.frame_at(now))
                .unwrap_or(FlipFrame::REST)
        });
    }

    /// Paints the whole board with caller-supplied frames.
    pub fn paint_with(&mut self, frame: impl Fn(DigitPosition) -> FlipFrame) {
        let board = self.board;
        let layout = board.layout();
        for tile in board.tiles() {
            if let Some(rect) = layout.tile_rect(tile.position()) {
                self.paint_tile(tile, rect, frame(tile.position()));
            }
        }
        for &rect in layout.separators() {
            self.paint_separator(rect, layout.metrics.separator_size);
        }
        if let (Some(rect), Some(text)) = (layout.label(), board.settings().label.as_deref()) {
            self.paint_label(rect, text, layout.metrics.label_size);
        }
    }

    pub fn paint_tile(&mut self, tile: &Tile, rect: Rect, frame: FlipFrame) {
        let bg = self.style.bg_color();
        let hinge = rect.center().y;

        self.list.push(
            ZIndex::BODY,
            DrawCmd::Panel(PanelCmd {
                rect,
                radii: CornerRadii::all(self.radius),
                color: bg,
                border: None,
                shadow: effect(&self.style.shadow).map(str::to_string),
            }),
        );

        let upper = rect.upper_half();
        let lower = rect.lower_half();
        self.paint_half(tile, FaceSlot::UpperStatic, upper, hinge, 1.0);
        self.paint_half(tile, FaceSlot::LowerStatic, lower, hinge, 1.0);

        let upper_fold = upper.scale_y_about(hinge, frame.upper_scale());
        let lower_fold = lower.scale_y_about(hinge, frame.lower_scale());
        self.paint_half(
            tile,
            FaceSlot::UpperAnimated,
            upper_fold,
            hinge,
            frame.upper_scale(),
        );
        self.paint_half(
            tile,
            FaceSlot::LowerAnimated,
            lower_fold,
            hinge,
            frame.lower_scale(),
        );
    }

    fn paint_half(&mut self, tile: &Tile, slot: FaceSlot, rect: Rect, hinge: f32, scale_y: f32) {
        let Some(face) = tile.face(slot) else {
            return;
        };
        let z = if slot.is_animated() { ZIndex::ANIMATED } else { ZIndex::STATIC };
        // Folded edge-on, or turned away from the viewer.
        if rect.is_empty() {
            return;
        }

        let radii = if slot.is_upper() {
            CornerRadii::top(self.radius)
        } else {
            CornerRadii::bottom(self.radius)
        };

        self.list.push_clip(rect);
        self.list.push(
            z,
            DrawCmd::Panel(PanelCmd {
                rect,
                radii,
                color: self.style.bg_color(),
                border: self
                    .style
                    .border_color()
                    .map(|color| Border { width: BORDER_WIDTH, color }),
                shadow: None,
            }),
        );
        self.list.push(
            z,
            DrawCmd::Glyph(GlyphCmd {
                glyph: face.glyph(),
                font: self.style.font.clone(),
                size: self.font_size,
                color: self.style.text_color(),
                center: rect.center().with_y(hinge),
                scale_y,
                glow: effect(&self.style.glow).map(str::to_string),
            }),
        );
        if slot.is_upper() {
            let y = rect.max().y - HINGE_LINE_WIDTH * 0.5;
            self.list.push(
                z,
                DrawCmd::Line(LineCmd {
                    from: Vec2::new(rect.origin.x, y),
                    to: Vec2::new(rect.max().x, y),
                    width: HINGE_LINE_WIDTH,
                    color: self.style.line_color(),
                }),
            );
        }
        self.list.pop_clip();
    }

    fn paint_separator(&mut self, rect: Rect, size: f32) {
        self.push_text(
            ":",
            rect.origin,
            size,
            self.style.separator_color(),
            effect(&self.style.separator.glow).map(str::to_string),
        );
    }

    fn paint_label(&mut self, rect: Rect, text: &str, size: f32) {
        self.push_text(text, rect.origin, size, self.style.text_color(), None);
    }

    fn push_text(&mut self, text: &str, origin: Vec2, size: f32, color: Color, glow: Option<String>) {
        self.list.push(
            ZIndex::BODY,
            DrawCmd::Text(TextCmd {
                text: text.to_string(),
                font: self.style.font.clone(),
                size,
                color,
                origin,
                glow,
            }),
        );
    }
}
