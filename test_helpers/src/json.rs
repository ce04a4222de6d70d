//! JSON rendering for assertions.

use anyhow::{Context, Result};
use semantic_merge::Value;

/// Render `value` as JSON, keeping only own enumerable data.
///
/// # Errors
///
/// Returns an error when serialisation fails.
pub fn render(value: &Value) -> Result<serde_json::Value> {
    serde_json::to_value(value).context("render merged value as JSON")
}

/// Parse JSON text into a fresh [`Value`].
///
/// # Errors
///
/// Returns an error when `text` is not valid JSON.
pub fn parse(text: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("parse JSON literal `{text}`"))?;
    Ok(Value::from(json))
}
