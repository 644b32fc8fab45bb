mod answer_source;
mod compose_runner;
mod feature_catalog;
mod fragment_store;
mod stack_store;

pub use answer_source::{AnswerSource, NoAnswers};
pub use compose_runner::ComposeRunner;
pub use feature_catalog::FeatureCatalog;
pub use fragment_store::FragmentStore;
pub use stack_store::StackStore;
