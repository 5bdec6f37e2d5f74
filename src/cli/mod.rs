//! CLI command handlers.
//!
//! These commands edit the same persisted settings the web server serves,
//! for scripting and troubleshooting.

pub mod config;
pub mod sidebar;
pub mod theme;

pub use config::ConfigArgs;
pub use sidebar::SidebarArgs;
pub use theme::ThemeArgs;

use crate::config::Config;
use crate::settings::SettingsContext;
use crate::storage::FileStore;
use anyhow::Result;
use std::sync::Arc;

/// Opens and mounts the settings stored in the configured storage directory.
pub fn open_settings(config: &Config) -> Result<SettingsContext> {
    let storage = FileStore::new(config.storage_dir()?);
    let mut ctx =
        SettingsContext::with_document(Arc::new(storage), config.ui.theme_mode.prefers_dark());
    ctx.mount();
    Ok(ctx)
}

/// Restores default appearance and sidebar layout.
pub fn reset(config: &Config) -> Result<()> {
    let mut ctx = open_settings(config)?;
    ctx.reset();
    println!("Appearance and sidebar settings reset to defaults.");
    Ok(())
}
