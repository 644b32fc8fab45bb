//! Versioned feature catalog model and parser (`catalog.toml`).

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::feature::{AccessLink, DEFAULT_SECRET_LENGTH, FeatureDescriptor, FieldKind, FieldSpec};
use crate::domain::AppError;
use crate::domain::FeatureId;
use crate::domain::compose::BASE_FRAGMENT;
use crate::domain::identifiers::validation::validate_env_key;
use crate::domain::placeholder::references;
use crate::ports::FeatureCatalog;

/// Catalog schema versions this build understands.
pub const SUPPORTED_CATALOG_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    version: u32,
    core: FeatureEntry,
    #[serde(default)]
    features: Vec<FeatureEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeatureEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
    #[serde(default)]
    access: Vec<AccessEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AccessEntry {
    label: String,
    url: String,
    #[serde(default)]
    if_selected: Vec<String>,
    #[serde(default)]
    unless_selected: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    key: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_kind")]
    kind: String,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    template: Option<String>,
}

fn default_kind() -> String {
    "text".to_string()
}

/// In-memory catalog: one core service plus optional features in declaration order.
#[derive(Debug, Clone)]
pub struct StackCatalog {
    core: FeatureDescriptor,
    features: Vec<FeatureDescriptor>,
}

impl StackCatalog {
    /// Build a catalog from descriptors, validating cross references.
    pub fn new(
        core: FeatureDescriptor,
        features: Vec<FeatureDescriptor>,
    ) -> Result<Self, AppError> {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        names.insert(core.name.as_str());

        for feature in &features {
            if feature.name.as_str() == BASE_FRAGMENT {
                return Err(AppError::InvalidCatalog(format!(
                    "feature name '{}' is reserved for the base fragment",
                    BASE_FRAGMENT
                )));
            }
            if !names.insert(feature.name.as_str()) {
                return Err(AppError::InvalidCatalog(format!(
                    "feature '{}' is declared more than once",
                    feature.name
                )));
            }
        }

        if !core.depends_on.is_empty() {
            return Err(AppError::InvalidCatalog(format!(
                "core service '{}' cannot declare dependencies",
                core.name
            )));
        }

        for feature in &features {
            for dep in &feature.depends_on {
                if dep == &core.name || !features.iter().any(|f| &f.name == dep) {
                    return Err(AppError::InvalidCatalog(format!(
                        "feature '{}' depends on undeclared feature '{}'",
                        feature.name, dep
                    )));
                }
            }
        }

        // Environment key -> declaring feature; keys are global across the catalog.
        let mut declared_keys: BTreeMap<&str, &str> = BTreeMap::new();
        for descriptor in std::iter::once(&core).chain(features.iter()) {
            let owner = descriptor.name.as_str();
            for field in &descriptor.fields {
                if let Some(first) = declared_keys.insert(field.key.as_str(), owner) {
                    return Err(AppError::InvalidCatalog(format!(
                        "key '{}' is declared by both '{}' and '{}'",
                        field.key, first, descriptor.name
                    )));
                }
            }
        }

        for descriptor in std::iter::once(&core).chain(features.iter()) {
            for field in &descriptor.fields {
                if let FieldKind::Derived { template } = &field.kind {
                    let refs = references(template);
                    let unknown = refs.iter().find(|k| !declared_keys.contains_key(k.as_str()));
                    if let Some(unknown) = unknown {
                        return Err(AppError::InvalidCatalog(format!(
                            "derived field '{}' in '{}' refers to undeclared key '{}'",
                            field.name, descriptor.name, unknown
                        )));
                    }
                }
            }

            for link in &descriptor.access {
                let mut conditions = link.if_selected.iter().chain(&link.unless_selected);
                if let Some(unknown) = conditions.find(|n| !names.contains(n.as_str())) {
                    return Err(AppError::InvalidCatalog(format!(
                        "access link '{}' in '{}' refers to undeclared feature '{}'",
                        link.label, descriptor.name, unknown
                    )));
                }
            }

            let mut field_names = BTreeSet::new();
            for field in &descriptor.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(AppError::InvalidCatalog(format!(
                        "field '{}' is declared twice in '{}'",
                        field.name, descriptor.name
                    )));
                }
            }
        }

        Ok(Self { core, features })
    }

    /// Parse and validate catalog content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| AppError::ParseError {
            what: "catalog.toml".into(),
            details: e.to_string(),
        })?;

        if file.version != SUPPORTED_CATALOG_VERSION {
            return Err(AppError::InvalidCatalog(format!(
                "unsupported catalog version {} (expected {})",
                file.version, SUPPORTED_CATALOG_VERSION
            )));
        }

        let core = convert_entry(file.core)?;
        let features = file.features.into_iter().map(convert_entry).collect::<Result<_, _>>()?;
        Self::new(core, features)
    }
}

impl FeatureCatalog for StackCatalog {
    fn core(&self) -> &FeatureDescriptor {
        &self.core
    }

    fn all(&self) -> &[FeatureDescriptor] {
        &self.features
    }
}

fn convert_entry(entry: FeatureEntry) -> Result<FeatureDescriptor, AppError> {
    let name = FeatureId::new(&entry.name)
        .map_err(|_| AppError::InvalidCatalog(format!("invalid feature name '{}'", entry.name)))?;

    let mut depends_on = Vec::new();
    for dep in &entry.depends_on {
        depends_on.push(FeatureId::new(dep).map_err(|_| {
            AppError::InvalidCatalog(format!("invalid dependency name '{}' in '{}'", dep, name))
        })?);
    }

    let fields =
        entry.fields.into_iter().map(|f| convert_field(&name, f)).collect::<Result<_, _>>()?;

    let access = entry
        .access
        .into_iter()
        .map(|a| AccessLink {
            label: a.label,
            url: a.url,
            if_selected: a.if_selected,
            unless_selected: a.unless_selected,
        })
        .collect();

    Ok(FeatureDescriptor { name, description: entry.description, depends_on, fields, access })
}

fn convert_field(feature: &FeatureId, entry: FieldEntry) -> Result<FieldSpec, AppError> {
    let invalid = |reason: String| {
        AppError::InvalidCatalog(format!("field '{}' in '{}': {}", entry.name, feature, reason))
    };

    if entry.name.is_empty() {
        return Err(invalid("name must not be empty".into()));
    }
    if !validate_env_key(&entry.key) {
        return Err(invalid(format!("'{}' is not a valid environment key", entry.key)));
    }

    let kind = match entry.kind.as_str() {
        "text" => FieldKind::Text { default: entry.default.clone() },
        "secret" => {
            let length = entry.length.unwrap_or(DEFAULT_SECRET_LENGTH);
            if length == 0 {
                return Err(invalid("secret length must be positive".into()));
            }
            FieldKind::Secret { length }
        }
        "derived" => match &entry.template {
            Some(template) => FieldKind::Derived { template: template.clone() },
            None => return Err(invalid("derived fields need a template".into())),
        },
        other => return Err(invalid(format!("unknown field kind '{}'", other))),
    };

    Ok(FieldSpec { name: entry.name, key: entry.key, description: entry.description, kind })
}
