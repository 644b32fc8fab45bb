use std::fmt;
use std::io;

use thiserror::Error;

/// A field that could not be resolved during configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingField {
    /// Feature (or core service) that declares the field.
    pub feature: String,
    /// Field name as supplied by answer sources.
    pub field: String,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.feature, self.field)
    }
}

fn join_missing(missing: &[MissingField]) -> String {
    missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Library-wide error type for n8n-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Requested feature is not declared in the catalog.
    #[error("Feature '{name}' not found. Available: {available}")]
    UnknownFeature { name: String, available: String },

    /// An answer names a field the feature does not declare.
    #[error("Field '{feature}.{field}' not found. Available: {available}")]
    UnknownField { feature: String, field: String, available: String },

    /// Dependency resolution did not reach a closed, acyclic selection.
    #[error("Dependency cycle detected: {0}")]
    DependencyCycle(String),

    /// One or more required values had neither an answer nor a default.
    #[error("Missing required value(s): {}", join_missing(.0))]
    MissingRequiredValue(Vec<MissingField>),

    /// Two fields wrote the same configuration key.
    #[error("Configuration key '{key}' written by '{feature}' was already set by '{first_feature}'")]
    DuplicateConfigKey { key: String, feature: String, first_feature: String },

    /// No document fragment exists for a selected feature.
    #[error("Document fragment for '{0}' not found")]
    MissingFragment(String),

    /// Fragment exists but cannot be used.
    #[error("Invalid fragment '{name}': {details}")]
    InvalidFragment { name: String, details: String },

    /// Catalog data is inconsistent.
    #[error("Invalid feature catalog: {0}")]
    InvalidCatalog(String),

    /// Feature identifier is invalid.
    #[error(
        "Invalid feature identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidFeatureId(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// External container-orchestration command failed.
    #[error("Compose error running '{command}': {details}")]
    Compose { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnknownFeature { .. }
            | AppError::UnknownField { .. }
            | AppError::MissingRequiredValue(_)
            | AppError::InvalidFeatureId(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DependencyCycle(_)
            | AppError::DuplicateConfigKey { .. }
            | AppError::InvalidFragment { .. }
            | AppError::InvalidCatalog(_) => io::ErrorKind::InvalidData,
            AppError::MissingFragment(_) => io::ErrorKind::NotFound,
            AppError::Compose { .. } => io::ErrorKind::Other,
        }
    }
}
