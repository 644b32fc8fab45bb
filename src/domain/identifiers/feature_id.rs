use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated feature identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \\, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(String);

impl_validated_id!(FeatureId, true, AppError::InvalidFeatureId);
