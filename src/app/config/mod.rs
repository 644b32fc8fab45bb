//! File-backed configuration loaders.

mod load_stack_config;

pub use load_stack_config::{DEFAULT_CONFIG_FILE, StackConfig, load_stack_config, parse_stack_config};
