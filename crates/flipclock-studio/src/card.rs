//! Card configuration loading.

use std::fs;
use std::path::Path;

use anyhow::Context;
use flipclock_core::CardSettings;
use serde_json::Value;

use crate::args::Args;

/// Reads the card JSON (if any), applies command-line overrides and
/// sanitizes the result.
pub fn load(args: &Args) -> anyhow::Result<CardSettings> {
    let mut raw = match &args.config {
        Some(path) => read_json(path)?,
        None => Value::Object(Default::default()),
    };
    apply_overrides(&mut raw, args);
    Ok(CardSettings::from_value(&raw))
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading card config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing card config {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(text)?;
    anyhow::ensure!(value.is_object(), "card config must be a JSON object");
    Ok(value)
}

fn apply_overrides(raw: &mut Value, args: &Args) {
    let Some(obj) = raw.as_object_mut() else {
        return;
    };
    if let Some(theme) = &args.theme {
        obj.insert("theme".into(), Value::String(theme.clone()));
    }
    if args.seconds {
        obj.insert("show_seconds".into(), Value::Bool(true));
    }
}
