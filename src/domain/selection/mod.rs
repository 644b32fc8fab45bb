//! Feature selection: dependency closure and configuration order.

pub mod selector;

pub use selector::{SelectionSet, Selector};
