//! Document composer: base fragment + feature fragments -> manifest and env documents.

use std::collections::BTreeSet;

use log::debug;
use serde_yaml::Value;

use super::env_file;
use super::fragment::Fragment;
use super::merge::{merge_values, resolve_placeholders};
use crate::domain::config::ConfigRecord;
use crate::domain::{AppError, SelectionSet};
use crate::ports::FragmentStore;

/// Name under which the base fragment is reported.
pub const BASE_FRAGMENT: &str = "base";

/// First line of every generated manifest.
pub const MANIFEST_HEADER: &str = "# Generated by n8n-setup. Re-run n8n-setup instead of editing.";

/// The two artifacts of one configuration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedStack {
    /// `KEY=VALUE` environment document.
    pub env: String,
    /// Compose manifest document.
    pub manifest: String,
    /// Placeholder keys left for runtime substitution, sorted.
    pub unresolved: Vec<String>,
}

/// Merges fragments into the final documents.
pub struct DocumentComposer;

impl DocumentComposer {
    /// Compose both documents for a finalized selection and record.
    pub fn compose<F: FragmentStore + ?Sized>(
        selection: &SelectionSet,
        config: &ConfigRecord,
        fragments: &F,
    ) -> Result<ComposedStack, AppError> {
        let (manifest, unresolved) = Self::compose_manifest(selection, config, fragments)?;

        let body = serde_yaml::to_string(&manifest).map_err(|e| AppError::InvalidFragment {
            name: BASE_FRAGMENT.to_string(),
            details: format!("manifest serialization failed: {}", e),
        })?;

        Ok(ComposedStack {
            env: env_file::render(config),
            manifest: format!("{}\n{}", MANIFEST_HEADER, body),
            unresolved,
        })
    }

    /// Build the manifest tree and the placeholder keys left unresolved.
    pub fn compose_manifest<F: FragmentStore + ?Sized>(
        selection: &SelectionSet,
        config: &ConfigRecord,
        fragments: &F,
    ) -> Result<(Value, Vec<String>), AppError> {
        let parsed = Self::load_fragments(selection, fragments)?;

        let mut document = Value::Mapping(Default::default());
        for fragment in &parsed {
            merge_values(&mut document, &fragment.body, "");
            for block in fragment.applicable_blocks(selection) {
                merge_values(&mut document, &block.merge, "");
            }
        }

        if !document.get("services").is_some_and(Value::is_mapping) {
            return Err(AppError::InvalidFragment {
                name: BASE_FRAGMENT.to_string(),
                details: "composed manifest has no 'services' mapping".into(),
            });
        }

        let mut unresolved = BTreeSet::new();
        resolve_placeholders(&mut document, config, &mut unresolved);
        if !unresolved.is_empty() {
            debug!("Placeholders left for runtime substitution: {:?}", unresolved);
        }

        Ok((document, unresolved.into_iter().collect()))
    }

    /// Load every fragment before merging so a missing one aborts early.
    fn load_fragments<F: FragmentStore + ?Sized>(
        selection: &SelectionSet,
        fragments: &F,
    ) -> Result<Vec<Fragment>, AppError> {
        let base = fragments
            .base()
            .ok_or_else(|| AppError::MissingFragment(BASE_FRAGMENT.to_string()))?;
        let mut parsed = vec![Fragment::parse(BASE_FRAGMENT, base)?];

        for feature in selection.iter() {
            let content = fragments
                .fragment(feature)
                .ok_or_else(|| AppError::MissingFragment(feature.to_string()))?;
            parsed.push(Fragment::parse(feature, content)?);
        }

        Ok(parsed)
    }
}
