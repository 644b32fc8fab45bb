use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, ComposedStack};
use crate::ports::StackStore;

/// Stack store that keeps the last written documents in memory.
#[derive(Default)]
pub struct MemoryStackStore {
    pub stored: Mutex<Option<ComposedStack>>,
    pub writes: Mutex<usize>,
}

impl MemoryStackStore {
    pub fn written(&self) -> Option<ComposedStack> {
        self.stored.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl StackStore for MemoryStackStore {
    fn read_previous_env(&self) -> Result<Option<String>, AppError> {
        Ok(self.stored.lock().unwrap().as_ref().map(|s| s.env.clone()))
    }

    fn write_artifacts(&self, stack: &ComposedStack) -> Result<Vec<PathBuf>, AppError> {
        *self.stored.lock().unwrap() = Some(stack.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(vec![PathBuf::from(".env"), PathBuf::from("docker-compose.yml")])
    }
}
