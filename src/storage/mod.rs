//! Durable key-value storage.
//!
//! The settings stores persist JSON strings under fixed keys. This module
//! provides the storage seam ([`DurableStore`]) and three backends:
//!
//! - [`FileStore`]: one `<key>.json` file per key in a directory
//! - [`MemoryStore`]: process-local map, used by tests and ephemeral sessions
//! - [`DisabledStore`]: every call fails, modelling unavailable storage

mod file;
mod memory;

pub use file::FileStore;
pub use memory::{DisabledStore, MemoryStore};

use anyhow::Result;
use std::fmt;

/// String-keyed, string-valued persistent storage.
///
/// Implementations must be safe to share across threads; the web server
/// keeps a single instance behind an `Arc`.
pub trait DurableStore: fmt::Debug + Send + Sync {
    /// Reads the value stored under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}
