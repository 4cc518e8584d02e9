//! Card configuration.
//!
//! Hosts hand over loosely typed JSON ([`RawCardConfig`]); [`CardSettings::sanitize`]
//! turns it into a fully validated record. Every field has a default and
//! nothing in here fails: invalid values are replaced, not reported.
//!
//! The clock core itself only reads [`ClockConfig`] and trusts it.

mod sanitize;

use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::digit::DigitPosition;

pub use sanitize::{
    sanitize_css_value, sanitize_text, validate_color, validate_font_family, validate_number,
};

pub const SIZE_RANGE: RangeInclusive<f64> = 10.0..=500.0;
pub const DEFAULT_SIZE: f64 = 100.0;

pub const ANIMATION_SPEED_RANGE: RangeInclusive<f64> = 0.1..=2.0;
pub const DEFAULT_ANIMATION_SPEED: f64 = 0.6;

pub const RADIUS_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const DEFAULT_RADIUS: f64 = 0.1;

// ── TimeFormat ────────────────────────────────────────────────────────────

/// Hour cycle used for the two hour digits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TimeFormat {
    H12,
    #[default]
    H24,
}

impl TimeFormat {
    /// Maps a 0–23 wall-clock hour onto this cycle (`0 → 12`, `13 → 1` for 12h).
    #[inline]
    pub fn display_hour(self, hour: u32) -> u32 {
        match self {
            TimeFormat::H24 => hour,
            TimeFormat::H12 => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }

    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == "12" => TimeFormat::H12,
            Some(Value::Number(n)) if n.as_u64() == Some(12) => TimeFormat::H12,
            _ => TimeFormat::H24,
        }
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

/// Built-in theme whitelist. Palettes live with the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Theme {
    #[default]
    Classic,
    IosLight,
    IosDark,
    Neon,
    RedStealth,
    Synthwave,
    EInk,
    Terminal,
    Wood,
    TrekOrange,
    TrekRed,
    TrekBlue,
    Borg,
    Aviator,
}

impl Theme {
    pub const ALL: [Theme; 14] = [
        Theme::Classic,
        Theme::IosLight,
        Theme::IosDark,
        Theme::Neon,
        Theme::RedStealth,
        Theme::Synthwave,
        Theme::EInk,
        Theme::Terminal,
        Theme::Wood,
        Theme::TrekOrange,
        Theme::TrekRed,
        Theme::TrekBlue,
        Theme::Borg,
        Theme::Aviator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::IosLight => "ios-light",
            Theme::IosDark => "ios-dark",
            Theme::Neon => "neon",
            Theme::RedStealth => "red-stealth",
            Theme::Synthwave => "synthwave",
            Theme::EInk => "e-ink",
            Theme::Terminal => "terminal",
            Theme::Wood => "wood",
            Theme::TrekOrange => "trek-orange",
            Theme::TrekRed => "trek-red",
            Theme::TrekBlue => "trek-blue",
            Theme::Borg => "borg",
            Theme::Aviator => "aviator",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.name() == name)
    }

    #[inline]
    pub fn is_trek(self) -> bool {
        matches!(self, Theme::TrekOrange | Theme::TrekRed | Theme::TrekBlue)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── LabelPosition ─────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LabelPosition {
    Top,
    #[default]
    Bottom,
}

impl LabelPosition {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("top") => LabelPosition::Top,
            _ => LabelPosition::Bottom,
        }
    }
}

// ── CustomStyle ───────────────────────────────────────────────────────────

/// Per-field overrides on top of a theme palette. Only validated values are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomStyle {
    pub bg: Option<String>,
    pub text: Option<String>,
    pub font: Option<String>,
    /// Corner radius as a fraction of the card size.
    pub radius: Option<f64>,
    pub shadow: Option<String>,
    pub line: Option<String>,
    pub glow: Option<String>,
}

impl CustomStyle {
    /// Sanitizes a `custom_style` object. Returns `None` if nothing survives.
    pub fn sanitize(value: &Value) -> Option<CustomStyle> {
        let obj = value.as_object()?;
        let string = |key: &'static str| obj.get(key).and_then(Value::as_str);

        let style = CustomStyle {
            bg: string("bg").and_then(validate_color),
            text: string("text").and_then(validate_color),
            font: string("font").and_then(validate_font_family),
            radius: obj
                .get("radius")
                .map(|v| validate_number(Some(v), RADIUS_RANGE, DEFAULT_RADIUS)),
            shadow: string("shadow").map(sanitize_css_value),
            line: string("line").and_then(validate_color),
            glow: string("glow").map(sanitize_css_value),
        };

        (!style.is_empty()).then_some(style)
    }

    pub fn is_empty(&self) -> bool {
        self.bg.is_none()
            && self.text.is_none()
            && self.font.is_none()
            && self.radius.is_none()
            && self.shadow.is_none()
            && self.line.is_none()
            && self.glow.is_none()
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────

/// Behavior record read by the clock core.
///
/// Immutable for the lifetime of one render; a reconfiguration replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub time_format: TimeFormat,
    pub show_seconds: bool,
    /// IANA zone name. `None` = local system time.
    pub timezone: Option<String>,
    /// Total duration of one digit flip (both phases).
    pub animation_speed: Duration,
}

impl ClockConfig {
    /// Converts seconds into a flip duration rounded to whole milliseconds, so
    /// the two phases always halve it exactly.
    pub fn speed_from_secs(secs: f64) -> Duration {
        Duration::from_millis((secs * 1000.0).round().max(0.0) as u64)
    }

    /// Duration of each of the two sequential flip phases.
    #[inline]
    pub fn half_speed(&self) -> Duration {
        self.animation_speed / 2
    }

    /// Active digit positions, in update order.
    #[inline]
    pub fn positions(&self) -> &'static [DigitPosition] {
        DigitPosition::active(self.show_seconds)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::H24,
            show_seconds: false,
            timezone: None,
            animation_speed: Self::speed_from_secs(DEFAULT_ANIMATION_SPEED),
        }
    }
}

// ── RawCardConfig ─────────────────────────────────────────────────────────

/// Card configuration exactly as the host supplied it.
///
/// Fields are kept as raw JSON so that wrongly typed values degrade to
/// defaults during sanitization instead of failing deserialization.
/// Unknown keys (such as the host's `type`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCardConfig {
    pub size: Option<Value>,
    pub time_format: Option<Value>,
    pub show_seconds: Option<Value>,
    pub animation_speed: Option<Value>,
    pub theme: Option<Value>,
    pub custom_style: Option<Value>,
    pub timezone: Option<Value>,
    pub label: Option<Value>,
    pub label_position: Option<Value>,
}

impl RawCardConfig {
    /// Reads a raw config from any JSON value. Non-objects yield all defaults.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

// ── CardSettings ──────────────────────────────────────────────────────────

/// Sanitized style + behavior record for one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSettings {
    /// Tile height in logical pixels.
    pub size: f32,
    pub clock: ClockConfig,
    pub theme: Theme,
    pub custom_style: Option<CustomStyle>,
    pub label: Option<String>,
    pub label_position: LabelPosition,
}

impl CardSettings {
    pub fn sanitize(raw: &RawCardConfig) -> Self {
        let size = validate_number(raw.size.as_ref(), SIZE_RANGE, DEFAULT_SIZE) as f32;
        let speed = validate_number(
            raw.animation_speed.as_ref(),
            ANIMATION_SPEED_RANGE,
            DEFAULT_ANIMATION_SPEED,
        );
        let show_seconds = match raw.show_seconds.as_ref() {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        };

        let clock = ClockConfig {
            time_format: TimeFormat::from_value(raw.time_format.as_ref()),
            show_seconds,
            timezone: raw
                .timezone
                .as_ref()
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            animation_speed: ClockConfig::speed_from_secs(speed),
        };

        Self {
            size,
            clock,
            theme: raw
                .theme
                .as_ref()
                .and_then(Value::as_str)
                .and_then(Theme::from_name)
                .unwrap_or_default(),
            custom_style: raw.custom_style.as_ref().and_then(CustomStyle::sanitize),
            label: raw.label.as_ref().and_then(Value::as_str).and_then(sanitize_text),
            label_position: LabelPosition::from_value(raw.label_position.as_ref()),
        }
    }

    /// Shorthand for `sanitize(&RawCardConfig::from_value(value))`.
    pub fn from_value(value: &Value) -> Self {
        Self::sanitize(&RawCardConfig::from_value(value))
    }
}

impl Default for CardSettings {
    fn default() -> Self {
        Self::sanitize(&RawCardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn twelve_hour_mapping() {
        assert_eq!(TimeFormat::H12.display_hour(0), 12);
        assert_eq!(TimeFormat::H12.display_hour(12), 12);
        assert_eq!(TimeFormat::H12.display_hour(13), 1);
        assert_eq!(TimeFormat::H12.display_hour(23), 11);
        assert_eq!(TimeFormat::H24.display_hour(0), 0);
    }

    #[test]
    fn defaults_for_empty_config() {
        let s = CardSettings::from_value(&json!({}));
        assert_eq!(s.size, 100.0);
        assert_eq!(s.clock.time_format, TimeFormat::H24);
        assert!(!s.clock.show_seconds);
        assert_eq!(s.clock.animation_speed, Duration::from_millis(600));
        assert_eq!(s.theme, Theme::Classic);
        assert_eq!(s.custom_style, None);
        assert_eq!(s.label, None);
        assert_eq!(s.label_position, LabelPosition::Bottom);
    }

    #[test]
    fn non_object_config_yields_defaults() {
        assert_eq!(CardSettings::from_value(&json!(null)), CardSettings::default());
        assert_eq!(CardSettings::from_value(&json!("size: 20")), CardSettings::default());
    }

    #[test]
    fn full_config_is_kept() {
        let s = CardSettings::from_value(&json!({
            "type": "custom:flip-clock-card",
            "size": 150,
            "time_format": "12",
            "show_seconds": "true",
            "animation_speed": 1.2,
            "theme": "borg",
            "timezone": " Asia/Tokyo ",
            "label": "Tokyo",
            "label_position": "top",
        }));
        assert_eq!(s.size, 150.0);
        assert_eq!(s.clock.time_format, TimeFormat::H12);
        assert!(s.clock.show_seconds);
        assert_eq!(s.clock.animation_speed, Duration::from_millis(1200));
        assert_eq!(s.clock.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(s.theme, Theme::Borg);
        assert_eq!(s.label.as_deref(), Some("Tokyo"));
        assert_eq!(s.label_position, LabelPosition::Top);
    }

    #[test]
    fn out_of_whitelist_values_fall_back() {
        let s = CardSettings::from_value(&json!({
            "size": 9000,
            "time_format": "13",
            "show_seconds": "yes",
            "animation_speed": 5,
            "theme": "comic-sans",
            "timezone": "",
            "label_position": "left",
        }));
        assert_eq!(s.size, 100.0);
        assert_eq!(s.clock.time_format, TimeFormat::H24);
        assert!(!s.clock.show_seconds);
        assert_eq!(s.clock.animation_speed, Duration::from_millis(600));
        assert_eq!(s.theme, Theme::Classic);
        assert_eq!(s.clock.timezone, None);
        assert_eq!(s.label_position, LabelPosition::Bottom);
    }

    #[test]
    fn half_speed_splits_exactly() {
        let mut c = ClockConfig::default();
        c.animation_speed = ClockConfig::speed_from_secs(0.125);
        assert_eq!(c.half_speed() * 2, c.animation_speed);
    }

    #[test]
    fn seconds_toggle_controls_positions() {
        let mut c = ClockConfig::default();
        assert_eq!(c.positions().len(), 4);
        c.show_seconds = true;
        assert_eq!(c.positions().len(), 6);
    }

    #[test]
    fn theme_names_round_trip_through_whitelist() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
        assert!(Theme::TrekBlue.is_trek());
        assert!(!Theme::Borg.is_trek());
    }

    // ── custom_style ──────────────────────────────────────────────────────

    #[test]
    fn custom_style_keeps_valid_fields_only() {
        let style = CustomStyle::sanitize(&json!({
            "bg": "#101010",
            "text": "url(javascript:alert(1))",
            "font": "'Oswald', sans-serif",
            "radius": 3,
            "glow": "0 0 4px <red>",
        }))
        .unwrap();
        assert_eq!(style.bg.as_deref(), Some("#101010"));
        assert_eq!(style.text, None);
        assert_eq!(style.font.as_deref(), Some("Oswald, sans-serif"));
        assert_eq!(style.radius, Some(0.1));
        assert_eq!(style.glow.as_deref(), Some("0 0 4px red"));
    }

    #[test]
    fn custom_style_with_nothing_valid_is_absent() {
        assert_eq!(CustomStyle::sanitize(&json!({ "bg": "not a color!" })), None);
        assert_eq!(CustomStyle::sanitize(&json!("bg: red")), None);
    }
}
