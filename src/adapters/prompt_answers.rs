//! Terminal prompts for fields no other source answers.

use dialoguer::{Input, Password};
use log::warn;

use crate::domain::{FieldKind, FieldSpec};
use crate::ports::{AnswerSource, FeatureCatalog};

/// Asks on the terminal for fields the inner source leaves unanswered.
///
/// Text fields prompt with their default pre-filled. Secret fields prompt
/// hidden and an empty reply keeps the previous value or generates one.
/// Derived fields are never prompted.
pub struct PromptAnswers<'a, A: AnswerSource + ?Sized, C: FeatureCatalog> {
    inner: &'a A,
    catalog: &'a C,
}

impl<'a, A: AnswerSource + ?Sized, C: FeatureCatalog> PromptAnswers<'a, A, C> {
    pub fn new(inner: &'a A, catalog: &'a C) -> Self {
        Self { inner, catalog }
    }

    fn field(&self, feature: &str, field: &str) -> Option<&'a FieldSpec> {
        let catalog: &'a C = self.catalog;
        catalog.descriptor(feature).and_then(|d| d.field(field))
    }

    fn prompt_label(feature: &str, spec: &FieldSpec) -> String {
        if spec.description.is_empty() {
            format!("[{}] {}", feature, spec.key)
        } else {
            format!("[{}] {} ({})", feature, spec.description, spec.key)
        }
    }
}

impl<A: AnswerSource + ?Sized, C: FeatureCatalog> AnswerSource for PromptAnswers<'_, A, C> {
    fn get(&self, feature: &str, field: &str, default: Option<&str>) -> Option<String> {
        if let Some(value) = self.inner.get(feature, field, default).filter(|v| !v.is_empty()) {
            return Some(value);
        }

        let spec = self.field(feature, field)?;
        let label = Self::prompt_label(feature, spec);

        let result = match &spec.kind {
            FieldKind::Derived { .. } => return None,
            FieldKind::Secret { .. } => Password::new()
                .with_prompt(format!("{} [empty: keep or generate]", label))
                .allow_empty_password(true)
                .interact(),
            FieldKind::Text { .. } => {
                let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
                if let Some(default) = default {
                    input = input.default(default.to_string());
                }
                input.interact_text()
            }
        };

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Failed to read {}.{}: {}", feature, field, err);
                None
            }
        }
    }

    fn answered(&self) -> Vec<(String, String)> {
        self.inner.answered()
    }
}
