//! Structural merge and placeholder resolution over YAML trees.

use std::collections::BTreeSet;

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::domain::config::ConfigRecord;
use crate::domain::placeholder::substitute_escaped;

/// Recursively merge `source` into `target`.
///
/// - Mappings: merge key by key, recursing into shared keys
/// - Sequences: append items not already present
/// - Null source: never clears an existing value
/// - Anything else: the source value replaces the target
pub fn merge_values(target: &mut Value, source: &Value, path: &str) {
    match (target, source) {
        (_, Value::Null) => {}
        (Value::Mapping(target_map), Value::Mapping(source_map)) => {
            for (key, value) in source_map {
                let key_path = child_path(path, key);
                match target_map.get_mut(key) {
                    Some(existing) => merge_values(existing, value, &key_path),
                    None => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Sequence(target_seq), Value::Sequence(source_seq)) => {
            for item in source_seq {
                if !target_seq.contains(item) {
                    target_seq.push(item.clone());
                }
            }
        }
        (target, source) => {
            if *target != *source {
                if !target.is_null() {
                    debug!("Overriding '{}' with a later fragment value", path);
                }
                *target = source.clone();
            }
        }
    }
}

fn child_path(path: &str, key: &Value) -> String {
    let key = match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim_end().to_string(),
    };
    if path.is_empty() { key } else { format!("{}.{}", path, key) }
}

/// Resolve `${KEY}` placeholders in every string scalar and mapping key.
///
/// Substituted values have `$` doubled so compose does not interpolate them
/// again. Unresolved keys are left in place and added to `unresolved`.
pub fn resolve_placeholders(
    value: &mut Value,
    record: &ConfigRecord,
    unresolved: &mut BTreeSet<String>,
) {
    match value {
        Value::String(text) => {
            let out = substitute_escaped(text, |key| record.get(key));
            unresolved.extend(out.unresolved);
            *text = out.text;
        }
        Value::Sequence(items) => {
            for item in items {
                resolve_placeholders(item, record, unresolved);
            }
        }
        Value::Mapping(map) => {
            let entries = std::mem::take(map);
            let mut resolved = Mapping::with_capacity(entries.len());
            for (mut key, mut item) in entries {
                resolve_placeholders(&mut key, record, unresolved);
                resolve_placeholders(&mut item, record, unresolved);
                resolved.insert(key, item);
            }
            *map = resolved;
        }
        Value::Tagged(tagged) => resolve_placeholders(&mut tagged.value, record, unresolved),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
