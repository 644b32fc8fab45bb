mod fake_compose_runner;
mod memory_stack_store;

pub use fake_compose_runner::FakeComposeRunner;
pub use memory_stack_store::MemoryStackStore;
