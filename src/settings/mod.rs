//! Settings context: the sidebar and appearance stores, the theme applier
//! and the style scope, composed into one object that is passed explicitly
//! to whoever presents or edits the settings.
//!
//! # Lifecycle
//!
//! 1. [`SettingsContext::new`] builds everything with defaults.
//! 2. [`SettingsContext::mount`] reads both persisted entries once and
//!    applies the theme. Writes are refused until this has happened.
//! 3. Mutators persist the changed store and re-apply the theme.
//! 4. [`SettingsContext::reset`] restores defaults and deletes both entries.

pub mod appearance;
pub mod observer;
pub mod sidebar;

pub use appearance::AppearanceStore;
pub use observer::{Listener, Subscribers, SubscriptionId};
pub use sidebar::SidebarStore;

use crate::models::{AppearanceSettings, ImportedTheme, SidebarConfig, SidebarPatch};
use crate::storage::DurableStore;
use crate::theme::{DocumentStyle, StyleAssignments, StyleScope, ThemeApplier};
use std::sync::Arc;
use tracing::{debug, info};

/// Provider object for sidebar and appearance state.
#[derive(Debug)]
pub struct SettingsContext<S: StyleScope = DocumentStyle> {
    sidebar: SidebarStore,
    appearance: AppearanceStore,
    applier: ThemeApplier,
    scope: S,
    dark: bool,
    mounted: bool,
}

impl SettingsContext<DocumentStyle> {
    /// Creates a context rendering into an in-memory [`DocumentStyle`].
    pub fn with_document(storage: Arc<dyn DurableStore>, dark: bool) -> Self {
        Self::new(storage, DocumentStyle::new(), dark)
    }
}

impl<S: StyleScope> SettingsContext<S> {
    /// Creates a context with default state. Call [`mount`](Self::mount)
    /// before mutating if persisted state should be kept.
    pub fn new(storage: Arc<dyn DurableStore>, scope: S, dark: bool) -> Self {
        Self {
            sidebar: SidebarStore::new(Arc::clone(&storage)),
            appearance: AppearanceStore::new(storage),
            applier: ThemeApplier::new(),
            scope,
            dark,
            mounted: false,
        }
    }

    /// Hydrates both stores from storage and applies the theme.
    ///
    /// Only the first call reads storage; later calls are no-ops.
    ///
    /// `sidebar-config` is authoritative for the layout. When it is absent,
    /// the snapshot embedded in `appearance-settings` is used instead.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let had_sidebar = self.sidebar.hydrate();
        let had_appearance = self.appearance.hydrate();

        if !had_sidebar && had_appearance {
            let snapshot = self.appearance.settings().sidebar_config;
            if snapshot != self.sidebar.config() {
                debug!("Restoring sidebar layout from appearance snapshot");
                self.sidebar.update(&SidebarPatch {
                    variant: Some(snapshot.variant),
                    collapsible: Some(snapshot.collapsible),
                    side: Some(snapshot.side),
                });
            }
        } else if self.appearance.settings().sidebar_config != self.sidebar.config() {
            self.appearance.set_sidebar_snapshot(self.sidebar.config());
        }

        self.reapply();
        info!(
            sidebar = had_sidebar,
            appearance = had_appearance,
            "Settings mounted"
        );
    }

    /// Returns true once [`mount`](Self::mount) has run.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current sidebar layout.
    #[must_use]
    pub const fn sidebar(&self) -> SidebarConfig {
        self.sidebar.config()
    }

    /// Current appearance settings.
    #[must_use]
    pub const fn appearance(&self) -> &AppearanceSettings {
        self.appearance.settings()
    }

    /// Current dark flag.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// Style scope the theme is applied to.
    #[must_use]
    pub const fn scope(&self) -> &S {
        &self.scope
    }

    /// Assignments for the current state, without touching the scope.
    #[must_use]
    pub fn resolved(&self) -> StyleAssignments {
        ThemeApplier::resolve(self.appearance.settings(), self.dark)
    }

    /// Merges a partial layout change, persisting both the layout and the
    /// appearance snapshot.
    pub fn update_sidebar(&mut self, patch: &SidebarPatch) -> SidebarConfig {
        let config = self.sidebar.update(patch);
        self.appearance.set_sidebar_snapshot(config);
        config
    }

    /// Selects a named theme and applies it.
    pub fn select_theme(&mut self, id: &str) -> StyleAssignments {
        self.appearance.select_theme(id);
        self.reapply()
    }

    /// Selects a tweak preset and applies it.
    pub fn select_tweakcn_theme(&mut self, id: &str) -> StyleAssignments {
        self.appearance.select_tweakcn_theme(id);
        self.reapply()
    }

    /// Activates an imported theme and applies it.
    pub fn import_theme(&mut self, theme: ImportedTheme) -> StyleAssignments {
        self.appearance.import_theme(theme);
        self.reapply()
    }

    /// Changes the corner radius and applies it.
    pub fn set_radius(&mut self, radius: &str) -> StyleAssignments {
        self.appearance.set_radius(radius);
        self.reapply()
    }

    /// Switches between light and dark, re-applying the active selection.
    pub fn set_dark_mode(&mut self, dark: bool) -> StyleAssignments {
        if dark != self.dark {
            debug!(dark, "Color mode changed");
        }
        self.dark = dark;
        self.reapply()
    }

    /// Clears all overrides, restores default appearance and layout, and
    /// deletes both persisted entries. The default theme is applied again
    /// afterwards. Safe to call repeatedly.
    pub fn reset(&mut self) -> StyleAssignments {
        self.applier.clear(&mut self.scope);
        self.sidebar.reset();
        self.appearance.reset();
        info!("Appearance reset to defaults");
        self.reapply()
    }

    /// Registers a listener for layout changes.
    pub fn subscribe_sidebar(&mut self, listener: Listener<SidebarConfig>) -> SubscriptionId {
        self.sidebar.subscribe(listener)
    }

    /// Registers a listener for appearance changes.
    pub fn subscribe_appearance(
        &mut self,
        listener: Listener<AppearanceSettings>,
    ) -> SubscriptionId {
        self.appearance.subscribe(listener)
    }

    /// Removes a layout listener.
    pub fn unsubscribe_sidebar(&mut self, id: SubscriptionId) -> bool {
        self.sidebar.unsubscribe(id)
    }

    /// Removes an appearance listener.
    pub fn unsubscribe_appearance(&mut self, id: SubscriptionId) -> bool {
        self.appearance.unsubscribe(id)
    }

    fn reapply(&mut self) -> StyleAssignments {
        self.applier
            .apply(&mut self.scope, self.appearance.settings(), self.dark)
    }
}
