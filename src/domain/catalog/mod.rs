//! Feature catalog: descriptors of the core service and optional features.

pub mod feature;
pub mod stack_catalog;

pub use feature::{AccessLink, DEFAULT_SECRET_LENGTH, FeatureDescriptor, FieldKind, FieldSpec};
pub use stack_catalog::StackCatalog;
