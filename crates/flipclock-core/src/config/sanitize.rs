//! Field-level validators shared by card config sanitization and style
//! resolution.
//!
//! Every validator is total: bad input yields `None` or the supplied default,
//! never an error.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static STRIPPED_CHARS: LazyLock<Regex> = LazyLock::new(|| compile(r#"[<>'"`]"#));
static JAVASCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)javascript:"));
static EXPRESSION_CALL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)expression\s*\("));
static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(#[0-9a-fA-F]{3,8}|rgba?\([^)]+\)|hsla?\([^)]+\)|[a-zA-Z]+)$")
});
static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9\s\-,]+$"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"));

// Only called with the literal patterns above.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

/// Strips characters and patterns that could break out of a style value.
///
/// Removes `< > ' " \``, any `javascript:` scheme and any `expression(` call
/// (case-insensitive), then trims surrounding whitespace. Removal repeats
/// until nothing matches, so split-up payloads cannot reassemble.
pub fn sanitize_css_value(value: &str) -> String {
    let mut out = STRIPPED_CHARS.replace_all(value, "").into_owned();
    while JAVASCRIPT_SCHEME.is_match(&out) || EXPRESSION_CALL.is_match(&out) {
        out = JAVASCRIPT_SCHEME.replace_all(&out, "").into_owned();
        out = EXPRESSION_CALL.replace_all(&out, "").into_owned();
    }
    out.trim().to_string()
}

/// Accepts hex (`#rgb` … `#rrggbbaa`), `rgb()`, `rgba()`, `hsl()`, `hsla()`
/// and bare named colors. Returns the sanitized value on success.
pub fn validate_color(value: &str) -> Option<String> {
    let s = sanitize_css_value(value);
    COLOR.is_match(&s).then_some(s)
}

/// Accepts font-family lists made of alphanumerics, whitespace, hyphens and
/// commas (quotes are already stripped by sanitization).
pub fn validate_font_family(value: &str) -> Option<String> {
    let s = sanitize_css_value(value);
    FONT_FAMILY.is_match(&s).then_some(s)
}

/// Reads a number from a JSON value, falling back to `default` when the value
/// is missing, non-numeric or outside `range`.
///
/// Strings are parsed by their leading numeric prefix, so `"120px"` reads as
/// `120`.
pub fn validate_number(value: Option<&Value>, range: RangeInclusive<f64>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_float_prefix(s),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && range.contains(&n) => n,
        _ => default,
    }
}

/// Strips markup characters from free text (labels) and trims it.
pub fn sanitize_text(value: &str) -> Option<String> {
    let s = STRIPPED_CHARS.replace_all(value, "");
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    LEADING_NUMBER.find(s)?.as_str().trim_start().parse().ok()
}
