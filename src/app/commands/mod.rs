//! Command implementations behind the CLI.

pub mod compose;
pub mod list;
pub mod setup;
