//! In-process stores.

use super::DurableStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Durable store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// Storage that is unavailable: every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

impl DurableStore for DisabledStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        anyhow::bail!("Storage is unavailable (read of '{key}')")
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<()> {
        anyhow::bail!("Storage is unavailable (write of '{key}')")
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        anyhow::bail!("Storage is unavailable (removal of '{key}')")
    }
}
