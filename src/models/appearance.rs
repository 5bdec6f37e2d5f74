//! Appearance settings and user-imported themes.

use crate::constants::DEFAULT_RADIUS;
use crate::models::SidebarConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// A user-supplied theme: arbitrary style-variable key/value pairs per mode.
///
/// Keys and values are not checked against any schema. Numbers and booleans
/// are kept in their JSON text form; nulls, arrays and objects are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImportedTheme {
    /// Variables applied in light mode
    #[serde(deserialize_with = "opaque_variables")]
    pub light: BTreeMap<String, String>,
    /// Variables applied in dark mode
    #[serde(deserialize_with = "opaque_variables")]
    pub dark: BTreeMap<String, String>,
}

fn opaque_variables<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        Value::Null => return Ok(BTreeMap::new()),
        other => {
            warn!(found = %other, "Imported theme mode is not a map, ignoring it");
            return Ok(BTreeMap::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(text) => Some((name, text)),
            Value::Number(number) => Some((name, number.to_string())),
            Value::Bool(flag) => Some((name, flag.to_string())),
            other => {
                warn!(variable = %name, found = %other, "Skipping imported variable without a scalar value");
                None
            }
        })
        .collect())
}

impl ImportedTheme {
    /// Returns the variables for the requested mode.
    #[must_use]
    pub const fn variables(&self, dark: bool) -> &BTreeMap<String, String> {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Returns true if neither mode carries any variable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// Persisted appearance preferences.
///
/// At most one of `selected_theme`, `selected_tweakcn_theme` and
/// `imported_theme` is active; the setters on
/// [`AppearanceStore`](crate::settings::AppearanceStore) clear the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    /// Named theme id, empty when none
    pub selected_theme: String,
    /// Tweak preset id, empty when none
    pub selected_tweakcn_theme: String,
    /// CSS length used for `--radius`
    pub selected_radius: String,
    /// Imported theme payload
    pub imported_theme: Option<ImportedTheme>,
    /// Snapshot of the sidebar layout at the time of the last save
    pub sidebar_config: SidebarConfig,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            selected_theme: String::new(),
            selected_tweakcn_theme: String::new(),
            selected_radius: DEFAULT_RADIUS.to_string(),
            imported_theme: None,
            sidebar_config: SidebarConfig::default(),
        }
    }
}

/// Which kind of theme selection is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSelection<'a> {
    /// User-imported payload
    Imported(&'a ImportedTheme),
    /// Entry of the named-theme table
    Named(&'a str),
    /// Entry of the tweak-preset table
    Tweak(&'a str),
    /// Built-in default palette
    Default,
}

impl AppearanceSettings {
    /// Resolves the active selection, first non-empty wins:
    /// imported theme, then named theme, then tweak preset.
    #[must_use]
    pub fn active_selection(&self) -> ThemeSelection<'_> {
        if let Some(imported) = self.imported_theme.as_ref().filter(|t| !t.is_empty()) {
            ThemeSelection::Imported(imported)
        } else if !self.selected_theme.is_empty() {
            ThemeSelection::Named(&self.selected_theme)
        } else if !self.selected_tweakcn_theme.is_empty() {
            ThemeSelection::Tweak(&self.selected_tweakcn_theme)
        } else {
            ThemeSelection::Default
        }
    }
}
