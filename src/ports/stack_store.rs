//! Output artifact storage port definition.

use std::path::PathBuf;

use crate::domain::{AppError, ComposedStack};

/// Persists composed documents for the deployment layer.
pub trait StackStore {
    /// Content of the environment document from a previous run, if any.
    fn read_previous_env(&self) -> Result<Option<String>, AppError>;

    /// Replace both artifacts. Either both are written or neither is.
    ///
    /// Returns the written paths (environment document first).
    fn write_artifacts(&self, stack: &ComposedStack) -> Result<Vec<PathBuf>, AppError>;
}
