//! Shared text normalization helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Strips one layer of backticks, the delimiter step text uses around JSON.
#[must_use]
pub fn unfence(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('`')
        .and_then(|v| v.strip_suffix('`'))
        .unwrap_or(trimmed)
}
