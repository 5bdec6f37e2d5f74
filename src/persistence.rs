//! Typed persistence of a single value under a single storage key.
//!
//! [`PersistenceAdapter`] wraps the JSON encoding and the failure policy of
//! the settings stores: nothing here ever returns an error to the caller.
//! Read failures, parse failures and write failures are logged and treated
//! as "no persisted state".
//!
//! Writes are refused until [`PersistenceAdapter::hydrate`] has run once, so
//! defaults produced before the initial read cannot overwrite stored data.

use crate::storage::DurableStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Reads and writes values of type `T` under a fixed key.
#[derive(Debug)]
pub struct PersistenceAdapter<T> {
    key: &'static str,
    hydrated: bool,
    _value: PhantomData<fn() -> T>,
}

impl<T> PersistenceAdapter<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates an adapter for `key`. It starts un-hydrated.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            hydrated: false,
            _value: PhantomData,
        }
    }

    /// Storage key this adapter owns.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Returns true once the initial read has completed.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Performs the initial read.
    ///
    /// Returns the persisted value when present and parseable. Unavailable
    /// storage and corrupt values are logged and yield `None`. The adapter
    /// is marked hydrated in every case, so later writes are allowed.
    pub fn hydrate(&mut self, store: &dyn DurableStore) -> Option<T> {
        self.hydrated = true;

        let raw = match store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = self.key, "No persisted value, using defaults");
                return None;
            }
            Err(e) => {
                warn!(key = self.key, error = %format!("{e:#}"), "Failed to read persisted value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key = self.key, "Hydrated persisted value");
                Some(value)
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "Persisted value is not valid JSON, using defaults");
                None
            }
        }
    }

    /// Writes the full value.
    ///
    /// Returns true if the value reached the store. Writes before hydration
    /// and failed writes return false.
    pub fn persist(&self, store: &dyn DurableStore, value: &T) -> bool {
        if !self.hydrated {
            debug!(key = self.key, "Skipping write before initial hydration");
            return false;
        }

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = self.key, error = %e, "Failed to serialize value");
                return false;
            }
        };

        match store.set_item(self.key, &json) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = self.key, error = %format!("{e:#}"), "Failed to persist value");
                false
            }
        }
    }

    /// Deletes the persisted entry. Returns true on success.
    pub fn clear(&self, store: &dyn DurableStore) -> bool {
        match store.remove_item(self.key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = self.key, error = %format!("{e:#}"), "Failed to remove persisted value");
                false
            }
        }
    }
}
