//! Config store for appearance settings.

use crate::constants::APPEARANCE_SETTINGS_KEY;
use crate::models::{AppearanceSettings, ImportedTheme, SidebarConfig};
use crate::persistence::PersistenceAdapter;
use crate::settings::observer::{Listener, Subscribers, SubscriptionId};
use crate::storage::DurableStore;
use std::sync::Arc;
use tracing::debug;

/// Holds the live [`AppearanceSettings`] and persists them under
/// `appearance-settings`.
///
/// Theme selections are mutually exclusive: each selector clears the other
/// two kinds of selection.
#[derive(Debug)]
pub struct AppearanceStore {
    settings: AppearanceSettings,
    adapter: PersistenceAdapter<AppearanceSettings>,
    subscribers: Subscribers<AppearanceSettings>,
    storage: Arc<dyn DurableStore>,
}

impl AppearanceStore {
    /// Creates a store holding default settings. Nothing is read yet.
    pub fn new(storage: Arc<dyn DurableStore>) -> Self {
        Self {
            settings: AppearanceSettings::default(),
            adapter: PersistenceAdapter::new(APPEARANCE_SETTINGS_KEY),
            subscribers: Subscribers::default(),
            storage,
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &AppearanceSettings {
        &self.settings
    }

    /// Returns true once the persisted value has been read.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.adapter.is_hydrated()
    }

    /// Reads the persisted settings. Returns true if they were found.
    pub fn hydrate(&mut self) -> bool {
        match self.adapter.hydrate(self.storage.as_ref()) {
            Some(settings) => {
                self.settings = settings;
                self.subscribers.notify(&self.settings);
                true
            }
            None => false,
        }
    }

    /// Selects a named theme, clearing any preset or imported theme.
    pub fn select_theme(&mut self, id: &str) {
        self.mutate(|s| {
            s.selected_theme = id.to_string();
            s.selected_tweakcn_theme.clear();
            s.imported_theme = None;
        });
    }

    /// Selects a tweak preset, clearing any named or imported theme.
    pub fn select_tweakcn_theme(&mut self, id: &str) {
        self.mutate(|s| {
            s.selected_tweakcn_theme = id.to_string();
            s.selected_theme.clear();
            s.imported_theme = None;
        });
    }

    /// Activates an imported theme, clearing any named theme or preset.
    pub fn import_theme(&mut self, theme: ImportedTheme) {
        self.mutate(move |s| {
            s.imported_theme = Some(theme);
            s.selected_theme.clear();
            s.selected_tweakcn_theme.clear();
        });
    }

    /// Sets the corner radius (any CSS length, not validated).
    pub fn set_radius(&mut self, radius: &str) {
        self.mutate(|s| s.selected_radius = radius.to_string());
    }

    /// Records the sidebar layout alongside the appearance settings.
    pub fn set_sidebar_snapshot(&mut self, config: SidebarConfig) {
        self.mutate(|s| s.sidebar_config = config);
    }

    /// Restores defaults and deletes the persisted entry.
    pub fn reset(&mut self) {
        self.settings = AppearanceSettings::default();
        self.adapter.clear(self.storage.as_ref());
        self.subscribers.notify(&self.settings);
    }

    /// Registers a listener for settings changes.
    pub fn subscribe(&mut self, listener: Listener<AppearanceSettings>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn mutate(&mut self, change: impl FnOnce(&mut AppearanceSettings)) {
        change(&mut self.settings);
        debug!(
            theme = %self.settings.selected_theme,
            preset = %self.settings.selected_tweakcn_theme,
            imported = self.settings.imported_theme.is_some(),
            radius = %self.settings.selected_radius,
            "Appearance settings updated"
        );
        self.adapter.persist(self.storage.as_ref(), &self.settings);
        self.subscribers.notify(&self.settings);
    }
}
