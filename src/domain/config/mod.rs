//! Configuration record and the builder that fills it.

pub mod builder;
pub mod record;
pub mod secret;

pub use builder::{ConfigBuilder, SecretGenerator};
pub use record::{ConfigEntry, ConfigRecord};
pub use secret::generate_secret;
