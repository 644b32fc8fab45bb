//! Document fragment storage port definition.

/// Trait for retrieving manifest fragments by feature name.
pub trait FragmentStore {
    /// Skeleton document for the core service.
    fn base(&self) -> Option<&str>;

    /// Fragment for an optional feature.
    fn fragment(&self, feature: &str) -> Option<&str>;
}
