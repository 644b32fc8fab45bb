pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod placeholder;
pub mod selection;

pub use catalog::{FeatureDescriptor, FieldKind, FieldSpec, StackCatalog};
pub use compose::{ComposedStack, DocumentComposer};
pub use config::{ConfigBuilder, ConfigRecord};
pub use error::{AppError, MissingField};
pub use identifiers::FeatureId;
pub use selection::{SelectionSet, Selector};
