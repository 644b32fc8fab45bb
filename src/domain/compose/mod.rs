//! Document composition: fragment merging, placeholder resolution and `.env` rendering.

pub mod composer;
pub mod env_file;
pub mod fragment;
pub mod merge;

pub use composer::{BASE_FRAGMENT, ComposedStack, DocumentComposer, MANIFEST_HEADER};
pub use fragment::{CONDITIONAL_KEY, ConditionalBlock, Fragment};
