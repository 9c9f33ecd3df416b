use super::StorageBackend;
use crate::error::{Result, SpendzError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since spendz is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without the overhead of
/// a lock.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing rollback behavior.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: plant a raw payload under a key, bypassing the error
    /// simulation. Useful for seeding corrupt blobs.
    pub fn plant(&self, key: &str, payload: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SpendzError::Persistence("simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
