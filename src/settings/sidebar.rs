//! Config store for the sidebar layout.

use crate::constants::SIDEBAR_CONFIG_KEY;
use crate::models::{SidebarConfig, SidebarPatch};
use crate::persistence::PersistenceAdapter;
use crate::settings::observer::{Listener, Subscribers, SubscriptionId};
use crate::storage::DurableStore;
use std::sync::Arc;
use tracing::debug;

/// Holds the live [`SidebarConfig`] and persists it under `sidebar-config`.
#[derive(Debug)]
pub struct SidebarStore {
    config: SidebarConfig,
    adapter: PersistenceAdapter<SidebarConfig>,
    subscribers: Subscribers<SidebarConfig>,
    storage: Arc<dyn DurableStore>,
}

impl SidebarStore {
    /// Creates a store holding the default layout. Nothing is read yet.
    pub fn new(storage: Arc<dyn DurableStore>) -> Self {
        Self {
            config: SidebarConfig::default(),
            adapter: PersistenceAdapter::new(SIDEBAR_CONFIG_KEY),
            subscribers: Subscribers::default(),
            storage,
        }
    }

    /// Current layout.
    #[must_use]
    pub const fn config(&self) -> SidebarConfig {
        self.config
    }

    /// Returns true once the persisted value has been read.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.adapter.is_hydrated()
    }

    /// Reads the persisted layout. Returns true if one was found.
    pub fn hydrate(&mut self) -> bool {
        match self.adapter.hydrate(self.storage.as_ref()) {
            Some(config) => {
                self.config = config;
                self.subscribers.notify(&self.config);
                true
            }
            None => false,
        }
    }

    /// Merges `patch` into the layout, persists, and notifies listeners.
    pub fn update(&mut self, patch: &SidebarPatch) -> SidebarConfig {
        self.config = self.config.merged(patch);
        debug!(config = ?self.config, "Sidebar config updated");
        self.adapter.persist(self.storage.as_ref(), &self.config);
        self.subscribers.notify(&self.config);
        self.config
    }

    /// Restores the default layout and deletes the persisted entry.
    pub fn reset(&mut self) {
        self.config = SidebarConfig::default();
        self.adapter.clear(self.storage.as_ref());
        self.subscribers.notify(&self.config);
    }

    /// Registers a listener for layout changes.
    pub fn subscribe(&mut self, listener: Listener<SidebarConfig>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
