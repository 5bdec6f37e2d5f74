//! Resolution and application of the active theme.

use crate::models::{AppearanceSettings, ThemeSelection};
use crate::theme::palettes::find_named_theme;
use crate::theme::presets::find_tweak_preset;
use crate::theme::scope::StyleScope;
use std::collections::{btree_map, BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Property carrying the light/dark color scheme.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Property carrying the selected corner radius.
pub const RADIUS_PROPERTY: &str = "--radius";

/// Concrete property assignments produced by a theme resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAssignments(BTreeMap<String, String>);

impl StyleAssignments {
    /// Sets a property; later assignments replace earlier ones.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates assignments in property-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Consumes the assignments into a plain map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a StyleAssignments {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turns a variable name into a custom property name (`primary` → `--primary`).
#[must_use]
pub fn custom_property(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

/// Resolves appearance settings into style assignments and applies them.
///
/// The applier remembers which properties it set, so re-applying a different
/// theme removes variables the new theme does not define.
#[derive(Debug, Default)]
pub struct ThemeApplier {
    applied: BTreeSet<String>,
}

impl ThemeApplier {
    /// Creates an applier that has not touched any scope yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties set by the last application.
    #[must_use]
    pub const fn applied(&self) -> &BTreeSet<String> {
        &self.applied
    }

    /// Computes the assignments for `settings` in the requested mode.
    ///
    /// The active selection is chosen imported > named > preset. Unknown ids
    /// fall back to the base palette. The selected radius is assigned last.
    #[must_use]
    pub fn resolve(settings: &AppearanceSettings, dark: bool) -> StyleAssignments {
        let mut out = StyleAssignments::default();

        match settings.active_selection() {
            ThemeSelection::Imported(theme) => {
                for (name, value) in theme.variables(dark) {
                    out.set(custom_property(name), value.clone());
                }
            }
            ThemeSelection::Named(id) => match find_named_theme(id) {
                Some(palette) => {
                    for (name, value) in palette.variables(dark) {
                        out.set(custom_property(name), *value);
                    }
                }
                None => warn!(theme = id, "Unknown named theme, using default palette"),
            },
            ThemeSelection::Tweak(id) => match find_tweak_preset(id) {
                Some(preset) => {
                    for (name, value) in preset.variables(dark) {
                        out.set(custom_property(name), *value);
                    }
                }
                None => warn!(preset = id, "Unknown tweak preset, using default palette"),
            },
            ThemeSelection::Default => {}
        }

        if !settings.selected_radius.is_empty() {
            out.set(RADIUS_PROPERTY, settings.selected_radius.clone());
        }
        out.set(COLOR_SCHEME_PROPERTY, if dark { "dark" } else { "light" });

        out
    }

    /// Resolves `settings` and writes the result into `scope`.
    ///
    /// Properties from a previous application that are not part of the new
    /// result are removed first.
    pub fn apply(
        &mut self,
        scope: &mut dyn StyleScope,
        settings: &AppearanceSettings,
        dark: bool,
    ) -> StyleAssignments {
        let assignments = Self::resolve(settings, dark);

        for stale in self
            .applied
            .iter()
            .filter(|name| assignments.get(name).is_none())
        {
            scope.remove_property(stale);
        }

        scope.set_dark(dark);
        for (name, value) in &assignments {
            scope.set_property(name, value);
        }

        self.applied = assignments.iter().map(|(name, _)| name.clone()).collect();
        debug!(count = assignments.len(), dark, "Applied theme");

        assignments
    }

    /// Removes every override from `scope`, including ones this applier did
    /// not set. Calling it repeatedly leaves the same state.
    pub fn clear(&mut self, scope: &mut dyn StyleScope) {
        scope.clear();
        self.applied.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImportedTheme;
    use crate::theme::scope::DocumentStyle;

    fn named(id: &str) -> AppearanceSettings {
        AppearanceSettings {
            selected_theme: id.to_string(),
            ..AppearanceSettings::default()
        }
    }

    #[test]
    fn test_default_selection_only_sets_radius_and_scheme() {
        let out = ThemeApplier::resolve(&AppearanceSettings::default(), false);
        assert_eq!(out.len(), 2);
        assert_eq!(out.get("--radius"), Some("0.5rem"));
        assert_eq!(out.get("color-scheme"), Some("light"));
    }

    #[test]
    fn test_named_theme_uses_mode_variant() {
        let light = ThemeApplier::resolve(&named("blue"), false);
        let dark = ThemeApplier::resolve(&named("blue"), true);
        assert_eq!(light.get("--primary"), Some("oklch(0.488 0.243 264.376)"));
        assert_eq!(dark.get("--primary"), Some("oklch(0.546 0.245 262.881)"));
        assert_eq!(dark.get("color-scheme"), Some("dark"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let out = ThemeApplier::resolve(&named("plaid"), false);
        assert_eq!(out.get("--primary"), None);
        assert_eq!(out.get("--radius"), Some("0.5rem"));
    }

    #[test]
    fn test_imported_wins_over_named_and_preset() {
        let mut imported = ImportedTheme::default();
        imported.light.insert("primary".into(), "tomato".into());
        let settings = AppearanceSettings {
            selected_theme: "blue".into(),
            selected_tweakcn_theme: "claude".into(),
            imported_theme: Some(imported),
            ..AppearanceSettings::default()
        };
        let out = ThemeApplier::resolve(&settings, false);
        assert_eq!(out.get("--primary"), Some("tomato"));
        assert_eq!(out.get("--font-sans"), None);
    }

    #[test]
    fn test_imported_keys_applied_as_given() {
        let mut imported = ImportedTheme::default();
        imported.dark.insert("--already-prefixed".into(), "1".into());
        imported.dark.insert("not a valid name!".into(), "2".into());
        let settings = AppearanceSettings {
            imported_theme: Some(imported),
            ..AppearanceSettings::default()
        };
        let out = ThemeApplier::resolve(&settings, true);
        assert_eq!(out.get("--already-prefixed"), Some("1"));
        assert_eq!(out.get("--not a valid name!"), Some("2"));
    }

    #[test]
    fn test_selected_radius_overrides_theme_radius() {
        let mut imported = ImportedTheme::default();
        imported.light.insert("radius".into(), "0rem".into());
        let settings = AppearanceSettings {
            imported_theme: Some(imported),
            selected_radius: "1rem".into(),
            ..AppearanceSettings::default()
        };
        assert_eq!(
            ThemeApplier::resolve(&settings, false).get("--radius"),
            Some("1rem")
        );
    }

    #[test]
    fn test_apply_removes_stale_properties() {
        let mut doc = DocumentStyle::new();
        let mut applier = ThemeApplier::new();

        let preset = AppearanceSettings {
            selected_tweakcn_theme: "catppuccin".into(),
            ..AppearanceSettings::default()
        };
        applier.apply(&mut doc, &preset, false);
        assert_eq!(doc.property("--font-sans"), Some("Montserrat, sans-serif"));

        applier.apply(&mut doc, &named("rose"), false);
        assert_eq!(doc.property("--font-sans"), None);
        assert_eq!(doc.property("--primary"), Some("oklch(0.586 0.253 17.585)"));
        assert!(applier.applied().contains("--primary"));
    }

    #[test]
    fn test_apply_sets_dark_marker() {
        let mut doc = DocumentStyle::new();
        let mut applier = ThemeApplier::new();
        applier.apply(&mut doc, &named("green"), true);
        assert!(doc.is_dark());
        assert_eq!(doc.property("color-scheme"), Some("dark"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut doc = DocumentStyle::new();
        let mut applier = ThemeApplier::new();
        applier.apply(&mut doc, &named("violet"), false);
        doc.set_property("--foreign", "x");

        applier.clear(&mut doc);
        let once = doc.clone();
        applier.clear(&mut doc);
        assert_eq!(doc, once);
        assert!(doc.inline().is_empty());
        assert!(applier.applied().is_empty());
    }
}
