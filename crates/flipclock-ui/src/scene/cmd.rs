use crate::color::Color;
use crate::geometry::{CornerRadii, Rect, Vec2};

/// Stroke along the outer edge of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Filled rounded rectangle: a tile body or one half of a face.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
    pub border: Option<Border>,
    /// CSS box-shadow value, passed through to the renderer.
    pub shadow: Option<String>,
}

/// A single digit glyph centered on a tile, optionally squashed vertically
/// about its center line.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCmd {
    pub glyph: char,
    pub font: String,
    pub size: f32,
    pub color: Color,
    pub center: Vec2,
    pub scale_y: f32,
    /// CSS text-shadow value.
    pub glow: Option<String>,
}

/// Free text (separators, label), top-left anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: String,
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    pub glow: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Panel(PanelCmd),
    Glyph(GlyphCmd),
    Text(TextCmd),
    Line(LineCmd),
}
