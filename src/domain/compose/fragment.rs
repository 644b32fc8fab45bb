//! Manifest fragments and their conditional blocks.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, SelectionSet};

/// Top-level compose extension key holding conditional blocks.
pub const CONDITIONAL_KEY: &str = "x-when";

/// A block merged into the manifest only when its condition holds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalBlock {
    /// Applies only if at least one of these is selected (empty: no requirement).
    #[serde(default)]
    pub if_selected: Vec<String>,
    /// Applies only if none of these is selected.
    #[serde(default)]
    pub unless_selected: Vec<String>,
    /// Document tree merged into the manifest.
    pub merge: Value,
}

impl ConditionalBlock {
    pub fn applies(&self, selection: &SelectionSet) -> bool {
        selection.satisfies(&self.if_selected, &self.unless_selected)
    }
}

/// Parsed fragment: unconditional body plus conditional blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub name: String,
    pub body: Value,
    pub blocks: Vec<ConditionalBlock>,
}

impl Fragment {
    pub fn parse(name: &str, content: &str) -> Result<Self, AppError> {
        let invalid =
            |details: String| AppError::InvalidFragment { name: name.to_string(), details };

        let value: Value = serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;
        let mut body = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            _ => return Err(invalid("top level must be a mapping".into())),
        };

        let blocks = match body.remove(CONDITIONAL_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_yaml::from_value::<Vec<ConditionalBlock>>(raw)
                .map_err(|e| invalid(format!("{}: {}", CONDITIONAL_KEY, e)))?,
        };

        if let Some(block) = blocks.iter().find(|b| !b.merge.is_mapping()) {
            return Err(invalid(format!(
                "{} block merge must be a mapping, found {:?}",
                CONDITIONAL_KEY, block.merge
            )));
        }

        Ok(Self { name: name.to_string(), body: Value::Mapping(body), blocks })
    }

    /// Blocks whose conditions hold for the selection, in declaration order.
    pub fn applicable_blocks<'a>(
        &'a self,
        selection: &'a SelectionSet,
    ) -> impl Iterator<Item = &'a ConditionalBlock> + 'a {
        self.blocks.iter().filter(move |b| b.applies(selection))
    }
}
