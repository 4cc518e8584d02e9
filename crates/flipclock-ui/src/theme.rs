//! Built-in palettes and style resolution.
//!
//! A palette is a set of CSS-valued fields. Custom overrides are layered on
//! top field by field, and every resolved field is re-validated with a
//! fallback to the palette value, so a resolved style is always usable.

use flipclock_core::config::{
    sanitize_css_value, validate_color, validate_font_family, CardSettings, Theme, DEFAULT_RADIUS,
    RADIUS_RANGE,
};

use crate::color::Color;

/// One built-in theme.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub font: &'static str,
    /// Corner radius as a fraction of the card size.
    pub radius: f64,
    pub shadow: &'static str,
    pub line: &'static str,
    pub glow: &'static str,
}

const BORG_BORDER: &str = "rgba(0, 255, 0, 0.3)";
const TREK_SEPARATOR_OPACITY: f32 = 0.8;

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Classic => Palette {
            bg: "#333",
            text: "#eee",
            font: "Roboto Mono, monospace",
            radius: 0.1,
            shadow: "0 4px 10px rgba(0,0,0,0.5)",
            line: "rgba(0,0,0,0.4)",
            glow: "none",
        },
        Theme::IosLight => Palette {
            bg: "#ffffff",
            text: "#1c1c1e",
            font: "-apple-system, sans-serif",
            radius: 0.15,
            shadow: "0 8px 20px rgba(0,0,0,0.15)",
            line: "rgba(0,0,0,0.1)",
            glow: "none",
        },
        Theme::IosDark => Palette {
            bg: "#1c1c1e",
            text: "#ffffff",
            font: "-apple-system, sans-serif",
            radius: 0.15,
            shadow: "0 8px 20px rgba(0,0,0,0.4)",
            line: "rgba(255,255,255,0.1)",
            glow: "none",
        },
        Theme::Neon => Palette {
            bg: "#000000",
            text: "#39ff14",
            font: "Courier New, monospace",
            radius: 0.05,
            shadow: "0 0 15px rgba(57, 255, 20, 0.3)",
            line: "rgba(57, 255, 20, 0.2)",
            glow: "0 0 10px rgba(57, 255, 20, 0.8)",
        },
        Theme::RedStealth => Palette {
            bg: "#0f0f0f",
            text: "#ff3b30",
            font: "Courier New, monospace",
            radius: 0.05,
            shadow: "0 0 10px rgba(255, 0, 0, 0.2)",
            line: "rgba(255, 0, 0, 0.15)",
            glow: "0 0 5px rgba(255, 59, 48, 0.6)",
        },
        Theme::Synthwave => Palette {
            bg: "#240046",
            text: "#ff00ff",
            font: "sans-serif",
            radius: 0.1,
            shadow: "0 5px 15px rgba(255, 0, 255, 0.4)",
            line: "rgba(255, 0, 255, 0.3)",
            glow: "0 0 8px rgba(255, 0, 255, 0.7)",
        },
        Theme::EInk => Palette {
            bg: "#f4f4f4",
            text: "#111",
            font: "Times New Roman, serif",
            radius: 0.02,
            shadow: "none",
            line: "rgba(0,0,0,0.8)",
            glow: "none",
        },
        Theme::Terminal => Palette {
            bg: "#000000",
            text: "#33ff00",
            font: "Lucida Console, Monaco, monospace",
            radius: 0.0,
            shadow: "none",
            line: "rgba(51, 255, 0, 0.3)",
            glow: "none",
        },
        Theme::Wood => Palette {
            bg: "#4e342e",
            text: "#d7ccc8",
            font: "serif",
            radius: 0.12,
            shadow: "0 4px 8px rgba(0,0,0,0.6)",
            line: "rgba(0,0,0,0.5)",
            glow: "none",
        },
        Theme::TrekOrange => trek("#ff9900"),
        Theme::TrekRed => trek("#cc2200"),
        Theme::TrekBlue => trek("#99ccff"),
        Theme::Borg => Palette {
            bg: "#000000",
            text: "#44ff44",
            font: "Consolas, Lucida Console, monospace",
            radius: 0.0,
            shadow: "0 0 5px #00aa00, inset 0 0 20px rgba(0,50,0, 0.9)",
            line: "rgba(0, 255, 0, 0.3)",
            glow: "0 0 8px rgba(50, 255, 50, 0.6)",
        },
        Theme::Aviator => Palette {
            bg: "#1e1e1e",
            text: "#f0f0f0",
            font: "Oswald, sans-serif",
            radius: 0.05,
            shadow: "0 2px 4px rgba(0,0,0,0.6)",
            line: "rgba(255, 255, 255, 0.1)",
            glow: "none",
        },
    }
}

const fn trek(bg: &'static str) -> Palette {
    Palette {
        bg,
        text: "#000000",
        font: "Antonio, Arial Narrow, sans-serif",
        radius: 0.3,
        shadow: "none",
        line: "rgba(0,0,0,0.2)",
        glow: "none",
    }
}

/// Appearance of the `:` separators between digit groups.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorStyle {
    pub color: String,
    pub opacity: f32,
    pub glow: String,
}

/// Fully resolved appearance for one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub bg: String,
    pub text: String,
    pub font: String,
    pub radius: f64,
    pub shadow: String,
    pub line: String,
    pub glow: String,
    pub separator: SeparatorStyle,
    /// 1px outline around each tile half, if the theme draws one.
    pub face_border: Option<String>,
}

impl ResolvedStyle {
    pub fn resolve(settings: &CardSettings) -> Self {
        let theme = settings.theme;
        let base = palette(theme);
        let custom = settings.custom_style.as_ref();
        let bg = custom
            .and_then(|c| c.bg.as_deref())
            .and_then(validate_color)
            .unwrap_or_else(|| base.bg.into());
        let text = custom
            .and_then(|c| c.text.as_deref())
            .and_then(validate_color)
            .unwrap_or_else(|| base.text.into());
        let font = custom
            .and_then(|c| c.font.as_deref())
            .and_then(validate_font_family)
            .unwrap_or_else(|| base.font.into());
        let radius = custom
            .and_then(|c| c.radius)
            .filter(|r| RADIUS_RANGE.contains(r))
            .unwrap_or(if RADIUS_RANGE.contains(&base.radius) { base.radius } else { DEFAULT_RADIUS });
        let shadow = custom
            .and_then(|c| c.shadow.as_deref())
            .and_then(css_effect)
            .unwrap_or_else(|| base.shadow.into());
        let line = custom
            .and_then(|c| c.line.as_deref())
            .and_then(validate_color)
            .unwrap_or_else(|| base.line.into());
        let glow = custom
            .and_then(|c| c.glow.as_deref())
            .and_then(css_effect)
            .unwrap_or_else(|| base.glow.into());

        let separator = SeparatorStyle {
            color: if theme.is_trek() && custom.is_none() { bg.clone() } else { text.clone() },
            opacity: if theme.is_trek() && custom.is_none() { TREK_SEPARATOR_OPACITY } else { 1.0 },
            glow: if theme == Theme::Borg { format!("0 0 10px {text}") } else { glow.clone() },
        };

        Self {
            face_border: (theme == Theme::Borg).then(|| BORG_BORDER.to_string()),
            bg,
            text,
            font,
            radius,
            shadow,
            line,
            glow,
            separator,
        }
    }

    #[inline]
    pub fn bg_color(&self) -> Color {
        parse_or_black(&self.bg)
    }

    #[inline]
    pub fn text_color(&self) -> Color {
        parse_or_black(&self.text)
    }

    #[inline]
    pub fn line_color(&self) -> Color {
        parse_or_black(&self.line)
    }

    pub fn separator_color(&self) -> Color {
        parse_or_black(&self.separator.color).with_opacity(self.separator.opacity)
    }

    pub fn border_color(&self) -> Option<Color> {
        self.face_border.as_deref().and_then(Color::parse_css)
    }
}

/// Shadow/glow values: sanitized, with `none` or nothing left meaning absent.
pub fn effect(value: &str) -> Option<&str> {
    let v = value.trim();
    (!v.is_empty() && !v.eq_ignore_ascii_case("none")).then_some(v)
}

fn css_effect(value: &str) -> Option<String> {
    let s = sanitize_css_value(value);
    (!s.is_empty()).then_some(s)
}

// Named colors outside the parser's table still pass validation; draw them
// black rather than dropping the face.
fn parse_or_black(value: &str) -> Color {
    Color::parse_css(value).unwrap_or_else(|| {
        log::debug!("unparsed color `{value}`; drawing black");
        Color::BLACK
    })
}
