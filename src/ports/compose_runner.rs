//! Container-orchestration CLI port definition.

use crate::domain::AppError;

/// Narrow interface to the external `docker compose` tool.
pub trait ComposeRunner {
    /// Start the stack in the background.
    fn up(&self) -> Result<(), AppError>;

    /// Captured output of the service listing.
    fn ps(&self) -> Result<String, AppError>;

    /// Stream logs to the terminal.
    fn logs(&self, service: Option<&str>, follow: bool) -> Result<(), AppError>;
}
