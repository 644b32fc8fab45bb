//! Configuration builder: turns a selection plus answers into a record.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use super::record::ConfigRecord;
use super::secret::generate_secret;
use crate::domain::placeholder::substitute;
use crate::domain::{AppError, FeatureDescriptor, FieldKind, FieldSpec, MissingField, SelectionSet};
use crate::ports::{AnswerSource, FeatureCatalog};

/// Produces a secret of the requested length.
pub type SecretGenerator = fn(usize) -> Result<String, AppError>;

/// Builds the configuration record for one run.
///
/// The core service is configured first, then each selected feature in
/// selection order, so derived fields can read keys written by dependencies.
/// Value precedence for a field: caller answer, value from the previous run,
/// catalog default, generated secret.
pub struct ConfigBuilder<'a, A: AnswerSource + ?Sized> {
    answers: &'a A,
    previous: BTreeMap<String, String>,
    reuse_secrets: bool,
    secrets: SecretGenerator,
    record: ConfigRecord,
    missing: Vec<MissingField>,
    missing_keys: BTreeSet<String>,
}

impl<'a, A: AnswerSource + ?Sized> ConfigBuilder<'a, A> {
    pub fn new(answers: &'a A) -> Self {
        Self {
            answers,
            previous: BTreeMap::new(),
            reuse_secrets: true,
            secrets: generate_secret,
            record: ConfigRecord::new(),
            missing: Vec::new(),
            missing_keys: BTreeSet::new(),
        }
    }

    /// Values from a previous run's environment document.
    pub fn with_previous(mut self, previous: BTreeMap<String, String>) -> Self {
        self.previous = previous;
        self
    }

    /// Regenerate secrets instead of reusing previous values.
    pub fn fresh_secrets(mut self, fresh: bool) -> Self {
        self.reuse_secrets = !fresh;
        self
    }

    pub fn with_secret_generator(mut self, secrets: SecretGenerator) -> Self {
        self.secrets = secrets;
        self
    }

    /// Build the record for the core service and every selected feature.
    pub fn build<C: FeatureCatalog>(
        mut self,
        selection: &SelectionSet,
        catalog: &C,
    ) -> Result<ConfigRecord, AppError> {
        self.configure(catalog.core())?;
        for feature in selection.iter() {
            let descriptor = catalog.describe(feature)?;
            self.configure(descriptor)?;
        }

        if !self.missing.is_empty() {
            return Err(AppError::MissingRequiredValue(self.missing));
        }
        Ok(self.record)
    }

    fn configure(&mut self, feature: &FeatureDescriptor) -> Result<(), AppError> {
        for field in &feature.fields {
            match self.resolve(feature, field)? {
                Some(value) => self.record.insert(&feature.name, &field.key, value)?,
                None => {
                    self.missing_keys.insert(field.key.clone());
                }
            }
        }
        Ok(())
    }

    fn answer(&self, feature: &str, field: &str, default: Option<&str>) -> Option<String> {
        self.answers.get(feature, field, default).filter(|v| !v.is_empty())
    }

    fn mark_missing(&mut self, feature: &FeatureDescriptor, field: &FieldSpec) {
        self.missing.push(MissingField {
            feature: feature.name.to_string(),
            field: field.name.clone(),
        });
    }

    fn resolve(
        &mut self,
        feature: &FeatureDescriptor,
        field: &FieldSpec,
    ) -> Result<Option<String>, AppError> {
        match &field.kind {
            FieldKind::Text { default } => {
                let previous = self.previous.get(&field.key).cloned();
                let fallback = previous.clone().or_else(|| default.clone());

                if let Some(value) = self.answer(&feature.name, &field.name, fallback.as_deref()) {
                    return Ok(Some(value));
                }
                match (previous, default) {
                    (Some(value), _) => {
                        info!("{}: keeping previous value for {}", feature.name, field.key);
                        Ok(Some(value))
                    }
                    (None, Some(value)) => {
                        info!("{}: using default for {}", feature.name, field.key);
                        Ok(Some(value.clone()))
                    }
                    (None, None) => {
                        self.mark_missing(feature, field);
                        Ok(None)
                    }
                }
            }
            FieldKind::Secret { length } => {
                if let Some(value) = self.answer(&feature.name, &field.name, None) {
                    return Ok(Some(value));
                }
                if self.reuse_secrets {
                    if let Some(value) = self.previous.get(&field.key).filter(|v| !v.is_empty()) {
                        info!("{}: reusing previous secret {}", feature.name, field.key);
                        return Ok(Some(value.clone()));
                    }
                }
                info!("{}: generated secret {}", feature.name, field.key);
                (self.secrets)(*length).map(Some)
            }
            FieldKind::Derived { template } => {
                if let Some(value) = self.answer(&feature.name, &field.name, None) {
                    return Ok(Some(value));
                }
                let rendered = substitute(template, |key| self.record.get(key));
                if rendered.unresolved.is_empty() {
                    return Ok(Some(rendered.text));
                }

                // Inputs that were already reported missing do not need a second report.
                if rendered.unresolved.iter().all(|k| self.missing_keys.contains(k)) {
                    debug!(
                        "{}: skipping {} until [{}] are provided",
                        feature.name,
                        field.key,
                        rendered.unresolved.join(", ")
                    );
                } else {
                    self.mark_missing(feature, field);
                }
                Ok(None)
            }
        }
    }
}
