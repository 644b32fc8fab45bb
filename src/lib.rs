//! n8n-setup: compose and deploy an n8n container stack with optional services.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::assets::stack_assets_embedded::EmbeddedStackAssets;
pub use adapters::static_answers::StaticAnswers;
pub use app::commands::list::{FeatureDetail, FeatureSummary, FieldInfo};
pub use app::commands::setup::{AccessUrl, SetupOptions, SetupPlan};
pub use domain::AppError;
