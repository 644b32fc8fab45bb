pub mod feature_id;
pub mod validation;

pub use feature_id::FeatureId;
