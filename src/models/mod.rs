//! Data models for sidebar layout and appearance preferences.
//!
//! Models are plain serde types, independent of storage and presentation.

pub mod appearance;
pub mod sidebar;

// Re-export all model types
pub use appearance::{AppearanceSettings, ImportedTheme, ThemeSelection};
pub use sidebar::{SidebarCollapsible, SidebarConfig, SidebarPatch, SidebarSide, SidebarVariant};
