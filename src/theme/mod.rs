//! Theme resolution for the dashboard.
//!
//! A theme is either a named color theme, a tweak preset, or a theme the
//! user imported. [`ThemeApplier`] turns the active one plus a light/dark
//! flag into custom-property assignments on a [`StyleScope`].

pub mod applier;
pub mod import;
pub mod palettes;
pub mod presets;
pub mod scope;

pub use applier::{custom_property, StyleAssignments, ThemeApplier};
pub use import::parse_theme;
pub use palettes::{find_named_theme, ThemePalette, BASE_PALETTE, NAMED_THEMES};
pub use presets::{find_tweak_preset, TweakPreset, TWEAK_PRESETS};
pub use scope::{DocumentStyle, StyleScope};
