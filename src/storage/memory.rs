use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local store; nothing survives a restart.
pub struct MemoryStorage {
    pub medium: String,
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
