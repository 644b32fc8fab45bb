//! `${KEY}` placeholder substitution in compose syntax.
//!
//! Recognized forms: `${KEY}`, `${KEY:-default}`, `${KEY-default}`,
//! `${KEY:?message}` and `${KEY?message}`. Only `KEY` is looked up; a resolved
//! token is replaced as a whole by the looked-up value. `$$` is an escaped
//! dollar and is copied through untouched. Text bound for a compose manifest
//! goes through [`substitute_escaped`].

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$|\$\{([A-Za-z_][A-Za-z0-9_]*)(?::?[-?][^}]*)?\}")
        .expect("placeholder pattern is valid")
});

/// Result of substituting placeholders in one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Keys that had no value, in order of first appearance.
    pub unresolved: Vec<String>,
}

/// Replace every resolvable placeholder in `input` with the raw value.
pub fn substitute<'a, F>(input: &str, lookup: F) -> Substitution
where
    F: Fn(&str) -> Option<&'a str>,
{
    replace(input, lookup, false)
}

/// Like [`substitute`], but writes `$` in looked-up values as `$$` so that a
/// later compose interpolation pass reads them back literally.
pub fn substitute_escaped<'a, F>(input: &str, lookup: F) -> Substitution
where
    F: Fn(&str) -> Option<&'a str>,
{
    replace(input, lookup, true)
}

fn replace<'a, F>(input: &str, lookup: F, escape_dollars: bool) -> Substitution
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut text = String::with_capacity(input.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        text.push_str(&input[last..whole.start()]);
        last = whole.end();

        let Some(key) = caps.get(1) else {
            text.push_str(whole.as_str());
            continue;
        };

        match lookup(key.as_str()) {
            Some(value) if escape_dollars => text.push_str(&value.replace('$', "$$")),
            Some(value) => text.push_str(value),
            None => {
                text.push_str(whole.as_str());
                if !unresolved.iter().any(|k| k == key.as_str()) {
                    unresolved.push(key.as_str().to_string());
                }
            }
        }
    }
    text.push_str(&input[last..]);

    Substitution { text, unresolved }
}

/// Keys referenced by placeholders in `input`.
pub fn references(input: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(input) {
        if let Some(key) = caps.get(1) {
            if !keys.iter().any(|k| k == key.as_str()) {
                keys.push(key.as_str().to_string());
            }
        }
    }
    keys
}
