//! Environment document (`.env`) rendering and parsing.
//!
//! Values made only of `[A-Za-z0-9_./:@,+-]` are written bare. Other values
//! without `'`, `\n` or `\r` are single-quoted and taken literally. Anything
//! else is double-quoted with `\\`, `\"`, `\n`, `\r` escapes and `$` doubled.

use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::domain::config::ConfigRecord;
use crate::domain::identifiers::validation::validate_env_key;

/// First line of every generated environment document.
pub const ENV_HEADER: &str = "# Generated by n8n-setup. Edit values and re-run to regenerate.";

/// Render the record as `KEY=VALUE` lines grouped under a comment per section.
pub fn render(record: &ConfigRecord) -> String {
    let mut lines = vec![ENV_HEADER.to_string(), String::new()];

    for (section, entries) in record.sections() {
        lines.push(format!("# {}", section));
        for entry in entries {
            lines.push(format!("{}={}", entry.key, encode_value(&entry.value)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Parse an environment document into ordered key/value pairs.
pub fn parse(content: &str) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let error = |details: String| AppError::ParseError {
            what: ".env".into(),
            details: format!("line {}: {}", index + 1, details),
        };

        let assignment = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        let Some((key, raw)) = assignment.split_once('=') else {
            return Err(error("expected KEY=VALUE".into()));
        };

        let key = key.trim();
        if !validate_env_key(key) {
            return Err(error(format!("invalid key '{}'", key)));
        }

        let value = decode_value(raw.trim()).map_err(error)?;
        pairs.push((key.to_string(), value));
    }

    Ok(pairs)
}

/// Parse into a map; later assignments win as they do for the compose CLI.
pub fn parse_map(content: &str) -> Result<BTreeMap<String, String>, AppError> {
    Ok(parse(content)?.into_iter().collect())
}

fn is_bare_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | ':' | '@' | ',' | '+' | '-')
}

fn encode_value(value: &str) -> String {
    if value.chars().all(is_bare_safe) {
        return value.to_string();
    }
    if !value.contains(&['\'', '\n', '\r'][..]) {
        return format!("'{}'", value);
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '$' => out.push_str("$$"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn decode_value(raw: &str) -> Result<String, String> {
    if let Some(rest) = raw.strip_prefix('\'') {
        return rest
            .strip_suffix('\'')
            .map(str::to_string)
            .ok_or_else(|| "unterminated single-quoted value".to_string());
    }

    if let Some(rest) = raw.strip_prefix('"') {
        let inner =
            rest.strip_suffix('"').ok_or_else(|| "unterminated double-quoted value".to_string())?;
        return Ok(unescape_double_quoted(inner));
    }

    // Bare values end at an inline comment.
    let bare = match raw.find(" #") {
        Some(pos) => raw[..pos].trim_end(),
        None => raw,
    };
    Ok(bare.to_string())
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '$' if chars.peek() == Some(&'$') => {
                chars.next();
                out.push('$');
            }
            other => out.push(other),
        }
    }
    out
}
