//! Feature descriptor domain model.

use crate::domain::FeatureId;

/// Length of generated secrets when the catalog does not specify one.
pub const DEFAULT_SECRET_LENGTH: usize = 32;

/// How a field obtains its value when the caller does not answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain value; required when there is no default.
    Text { default: Option<String> },
    /// Credential generated from the OS random source when not supplied.
    Secret { length: usize },
    /// Value rendered from keys already present in the record.
    Derived { template: String },
}

/// A single configuration value contributed by a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Answer key (`get(feature, name)`).
    pub name: String,
    /// Environment key written to the configuration record.
    pub key: String,
    /// Human-readable description.
    pub description: String,
    pub kind: FieldKind,
}

/// Where a running service can be reached, shown after setup.
///
/// The URL is a template over the configuration record and is offered only
/// when its selection condition holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLink {
    pub label: String,
    pub url: String,
    pub if_selected: Vec<String>,
    pub unless_selected: Vec<String>,
}

/// An optional deployable capability, or the core service itself.
///
/// Descriptors are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescriptor {
    /// Feature name (unique identifier).
    pub name: FeatureId,
    /// Short summary of what the feature provides.
    pub description: String,
    /// Features that must be selected alongside this one.
    pub depends_on: Vec<FeatureId>,
    /// Configuration values, in the order they are built.
    pub fields: Vec<FieldSpec>,
    /// Access URLs reported once the stack is configured.
    pub access: Vec<AccessLink>,
}

impl FeatureDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
