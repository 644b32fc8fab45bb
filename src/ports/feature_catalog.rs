//! Feature catalog port definition.

use crate::domain::{AppError, FeatureDescriptor};

/// Trait for accessing the static feature catalog.
pub trait FeatureCatalog {
    /// The always-present core service.
    fn core(&self) -> &FeatureDescriptor;

    /// All optional features in declaration order.
    fn all(&self) -> &[FeatureDescriptor];

    /// Get a feature by name.
    fn get(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.all().iter().find(|f| f.name.as_str() == name)
    }

    /// The core service or an optional feature by name.
    fn descriptor(&self, name: &str) -> Option<&FeatureDescriptor> {
        if self.core().name.as_str() == name { Some(self.core()) } else { self.get(name) }
    }

    /// Declaration index of a feature.
    fn position(&self, name: &str) -> Option<usize> {
        self.all().iter().position(|f| f.name.as_str() == name)
    }

    /// Get all feature names in declaration order.
    fn names(&self) -> Vec<&str> {
        self.all().iter().map(|f| f.name.as_str()).collect()
    }

    /// Get a feature by name, failing with `UnknownFeature`.
    fn describe(&self, name: &str) -> Result<&FeatureDescriptor, AppError> {
        self.get(name).ok_or_else(|| AppError::UnknownFeature {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }
}
