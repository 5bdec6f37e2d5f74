//! Sidebar layout options.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Visual style of the sidebar container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidebarVariant {
    /// Flush sidebar attached to the viewport edge
    Sidebar,
    /// Detached sidebar with its own border and shadow
    Floating,
    /// Sidebar with the page content inset next to it
    #[default]
    Inset,
}

/// How the sidebar collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidebarCollapsible {
    /// Slides fully out of the viewport
    #[default]
    Offcanvas,
    /// Shrinks to an icon rail
    Icon,
    /// Never collapses
    None,
}

/// Viewport edge the sidebar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidebarSide {
    /// Left edge
    #[default]
    Left,
    /// Right edge
    Right,
}

impl SidebarVariant {
    /// All variants, in display order.
    pub const ALL: [Self; 3] = [Self::Sidebar, Self::Floating, Self::Inset];

    /// Returns the persisted name of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Floating => "floating",
            Self::Inset => "inset",
        }
    }
}

impl SidebarCollapsible {
    /// All collapse modes, in display order.
    pub const ALL: [Self; 3] = [Self::Offcanvas, Self::Icon, Self::None];

    /// Returns the persisted name of the collapse mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offcanvas => "offcanvas",
            Self::Icon => "icon",
            Self::None => "none",
        }
    }
}

impl SidebarSide {
    /// Both sides.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the persisted name of the side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

macro_rules! impl_name_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let valid: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        anyhow::anyhow!(
                            "Invalid sidebar {} '{}'. Expected one of: {}",
                            $what,
                            s,
                            valid.join(", ")
                        )
                    })
            }
        }
    };
}

impl_name_traits!(SidebarVariant, "variant");
impl_name_traits!(SidebarCollapsible, "collapsible mode");
impl_name_traits!(SidebarSide, "side");

/// Reads one layout field, falling back to its default when the stored
/// value is not one of the known names.
fn lenient_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = anyhow::Error> + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::String(name) => name.parse::<T>(),
        other => Err(anyhow::anyhow!("expected a string, found {other}")),
    };

    Ok(parsed.unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring stored sidebar option, using default");
        T::default()
    }))
}

/// Sidebar layout configuration.
///
/// Always fully populated. Fields missing from a persisted value take their
/// defaults when deserialized, and so do fields holding an unknown name;
/// the remaining fields are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SidebarConfig {
    /// Container style
    #[serde(deserialize_with = "lenient_field")]
    pub variant: SidebarVariant,
    /// Collapse behavior
    #[serde(deserialize_with = "lenient_field")]
    pub collapsible: SidebarCollapsible,
    /// Attached edge
    #[serde(deserialize_with = "lenient_field")]
    pub side: SidebarSide,
}

/// Partial update for [`SidebarConfig`]. Absent fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SidebarPatch {
    /// New container style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<SidebarVariant>,
    /// New collapse behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<SidebarCollapsible>,
    /// New attached edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<SidebarSide>,
}

impl SidebarPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.variant.is_none() && self.collapsible.is_none() && self.side.is_none()
    }
}

impl SidebarConfig {
    /// Returns a copy with the patch merged in (shallow merge).
    #[must_use]
    pub fn merged(self, patch: &SidebarPatch) -> Self {
        Self {
            variant: patch.variant.unwrap_or(self.variant),
            collapsible: patch.collapsible.unwrap_or(self.collapsible),
            side: patch.side.unwrap_or(self.side),
        }
    }

    /// Iterates every valid combination of sidebar options.
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        SidebarVariant::ALL.into_iter().flat_map(|variant| {
            SidebarCollapsible::ALL.into_iter().flat_map(move |collapsible| {
                SidebarSide::ALL.into_iter().map(move |side| Self {
                    variant,
                    collapsible,
                    side,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sidebar_config() {
        let config = SidebarConfig::default();
        assert_eq!(config.variant, SidebarVariant::Inset);
        assert_eq!(config.collapsible, SidebarCollapsible::Offcanvas);
        assert_eq!(config.side, SidebarSide::Left);
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        let config = SidebarConfig {
            variant: SidebarVariant::Floating,
            collapsible: SidebarCollapsible::None,
            side: SidebarSide::Right,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"variant":"floating","collapsible":"none","side":"right"}"#
        );
    }

    #[test]
    fn test_partial_value_fills_defaults() {
        let config: SidebarConfig = serde_json::from_str(r#"{"side":"right"}"#).unwrap();
        assert_eq!(config.variant, SidebarVariant::Inset);
        assert_eq!(config.side, SidebarSide::Right);
    }

    #[test]
    fn test_unknown_stored_value_only_loses_its_field() {
        let config: SidebarConfig =
            serde_json::from_str(r#"{"variant":"wide","collapsible":"icon","side":7}"#).unwrap();
        assert_eq!(config.variant, SidebarVariant::Inset);
        assert_eq!(config.collapsible, SidebarCollapsible::Icon);
        assert_eq!(config.side, SidebarSide::Left);
    }

    #[test]
    fn test_patch_stays_strict() {
        assert!(serde_json::from_str::<SidebarPatch>(r#"{"variant":"wide"}"#).is_err());
    }

    #[test]
    fn test_merge_is_shallow() {
        let base = SidebarConfig::default();
        let patch = SidebarPatch {
            collapsible: Some(SidebarCollapsible::Icon),
            ..SidebarPatch::default()
        };
        let merged = base.merged(&patch);
        assert_eq!(merged.collapsible, SidebarCollapsible::Icon);
        assert_eq!(merged.variant, base.variant);
        assert_eq!(merged.side, base.side);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = SidebarConfig {
            variant: SidebarVariant::Sidebar,
            collapsible: SidebarCollapsible::Icon,
            side: SidebarSide::Right,
        };
        assert!(SidebarPatch::default().is_empty());
        assert_eq!(base.merged(&SidebarPatch::default()), base);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Floating".parse::<SidebarVariant>().unwrap(), SidebarVariant::Floating);
        assert_eq!("icon".parse::<SidebarCollapsible>().unwrap(), SidebarCollapsible::Icon);
        assert_eq!(" right ".parse::<SidebarSide>().unwrap(), SidebarSide::Right);
        assert!("top".parse::<SidebarSide>().is_err());
    }

    #[test]
    fn test_all_combinations_count() {
        assert_eq!(SidebarConfig::all_combinations().count(), 18);
    }
}
