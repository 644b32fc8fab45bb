//! Answer provider port definition.

/// Supplies caller-provided values for feature fields.
pub trait AnswerSource {
    /// Look up the answer for `feature.field`.
    ///
    /// `default` is the value that will be used when this returns `None`;
    /// interactive sources show it to the user. Empty strings are treated as
    /// unanswered by the configuration builder.
    fn get(&self, feature: &str, field: &str, default: Option<&str>) -> Option<String>;

    /// `(feature, field)` pairs this source holds answers for up front.
    ///
    /// Sources that only answer on demand report nothing.
    fn answered(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Answer source that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnswers;

impl AnswerSource for NoAnswers {
    fn get(&self, _feature: &str, _field: &str, _default: Option<&str>) -> Option<String> {
        None
    }
}
