//! Answers known up front: stack config file and `--set` flags.

use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::AnswerSource;

/// In-memory answers keyed by feature and field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticAnswers {
    answers: BTreeMap<(String, String), String>,
}

impl StaticAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an answer, replacing any earlier one for the same field.
    pub fn insert(&mut self, feature: &str, field: &str, value: impl Into<String>) {
        self.answers.insert((feature.to_string(), field.to_string()), value.into());
    }

    /// Add every answer from a `feature -> field -> value` table.
    pub fn extend_from_table(&mut self, table: &BTreeMap<String, BTreeMap<String, String>>) {
        for (feature, fields) in table {
            for (field, value) in fields {
                self.insert(feature, field, value.clone());
            }
        }
    }

    /// Parse and add a `feature.field=value` assignment.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<(), AppError> {
        let (feature, field, value) = parse_assignment(assignment)?;
        self.insert(feature, field, value);
        Ok(())
    }

}

impl AnswerSource for StaticAnswers {
    fn get(&self, feature: &str, field: &str, _default: Option<&str>) -> Option<String> {
        self.answers.get(&(feature.to_string(), field.to_string())).cloned()
    }

    fn answered(&self) -> Vec<(String, String)> {
        self.answers.keys().cloned().collect()
    }
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str, &str), AppError> {
    let invalid = || {
        AppError::Configuration(format!(
            "Invalid answer '{}': expected FEATURE.FIELD=VALUE",
            assignment
        ))
    };

    let (target, value) = assignment.split_once('=').ok_or_else(invalid)?;
    let (feature, field) = target.trim().split_once('.').ok_or_else(invalid)?;
    if feature.is_empty() || field.is_empty() {
        return Err(invalid());
    }
    Ok((feature, field, value))
}
