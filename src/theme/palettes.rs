//! Built-in palettes: the base stylesheet and the named color themes.
//!
//! Variable names are stored without the leading `--`.

/// A named color theme.
///
/// Named themes only carry the variables they change; everything else comes
/// from the base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Identifier stored in `selectedTheme`
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    /// Light mode variables
    pub light: &'static [(&'static str, &'static str)],
    /// Dark mode variables
    pub dark: &'static [(&'static str, &'static str)],
}

impl ThemePalette {
    /// Returns the variables for the requested mode.
    #[must_use]
    pub const fn variables(&self, dark: bool) -> &'static [(&'static str, &'static str)] {
        if dark {
            self.dark
        } else {
            self.light
        }
    }
}

/// Base stylesheet palette (what the page looks like with no overrides).
pub const BASE_PALETTE: ThemePalette = ThemePalette {
    id: "default",
    label: "Default",
    light: &[
        ("radius", "0.5rem"),
        ("background", "oklch(1 0 0)"),
        ("foreground", "oklch(0.145 0 0)"),
        ("card", "oklch(1 0 0)"),
        ("card-foreground", "oklch(0.145 0 0)"),
        ("popover", "oklch(1 0 0)"),
        ("popover-foreground", "oklch(0.145 0 0)"),
        ("primary", "oklch(0.205 0 0)"),
        ("primary-foreground", "oklch(0.985 0 0)"),
        ("secondary", "oklch(0.97 0 0)"),
        ("secondary-foreground", "oklch(0.205 0 0)"),
        ("muted", "oklch(0.97 0 0)"),
        ("muted-foreground", "oklch(0.556 0 0)"),
        ("accent", "oklch(0.97 0 0)"),
        ("accent-foreground", "oklch(0.205 0 0)"),
        ("destructive", "oklch(0.577 0.245 27.325)"),
        ("border", "oklch(0.922 0 0)"),
        ("input", "oklch(0.922 0 0)"),
        ("ring", "oklch(0.708 0 0)"),
        ("sidebar", "oklch(0.985 0 0)"),
        ("sidebar-foreground", "oklch(0.145 0 0)"),
        ("sidebar-primary", "oklch(0.205 0 0)"),
        ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
        ("sidebar-accent", "oklch(0.97 0 0)"),
        ("sidebar-accent-foreground", "oklch(0.205 0 0)"),
        ("sidebar-border", "oklch(0.922 0 0)"),
        ("sidebar-ring", "oklch(0.708 0 0)"),
    ],
    dark: &[
        ("radius", "0.5rem"),
        ("background", "oklch(0.145 0 0)"),
        ("foreground", "oklch(0.985 0 0)"),
        ("card", "oklch(0.205 0 0)"),
        ("card-foreground", "oklch(0.985 0 0)"),
        ("popover", "oklch(0.205 0 0)"),
        ("popover-foreground", "oklch(0.985 0 0)"),
        ("primary", "oklch(0.922 0 0)"),
        ("primary-foreground", "oklch(0.205 0 0)"),
        ("secondary", "oklch(0.269 0 0)"),
        ("secondary-foreground", "oklch(0.985 0 0)"),
        ("muted", "oklch(0.269 0 0)"),
        ("muted-foreground", "oklch(0.708 0 0)"),
        ("accent", "oklch(0.269 0 0)"),
        ("accent-foreground", "oklch(0.985 0 0)"),
        ("destructive", "oklch(0.704 0.191 22.216)"),
        ("border", "oklch(1 0 0 / 10%)"),
        ("input", "oklch(1 0 0 / 15%)"),
        ("ring", "oklch(0.556 0 0)"),
        ("sidebar", "oklch(0.205 0 0)"),
        ("sidebar-foreground", "oklch(0.985 0 0)"),
        ("sidebar-primary", "oklch(0.488 0.243 264.376)"),
        ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
        ("sidebar-accent", "oklch(0.269 0 0)"),
        ("sidebar-accent-foreground", "oklch(0.985 0 0)"),
        ("sidebar-border", "oklch(1 0 0 / 10%)"),
        ("sidebar-ring", "oklch(0.556 0 0)"),
    ],
};

/// Named color themes, in display order.
pub const NAMED_THEMES: &[ThemePalette] = &[
    ThemePalette {
        id: "blue",
        label: "Blue",
        light: &[
            ("primary", "oklch(0.488 0.243 264.376)"),
            ("primary-foreground", "oklch(0.97 0.014 254.604)"),
            ("ring", "oklch(0.708 0.165 254.624)"),
            ("sidebar-primary", "oklch(0.488 0.243 264.376)"),
            ("sidebar-primary-foreground", "oklch(0.97 0.014 254.604)"),
            ("sidebar-ring", "oklch(0.708 0.165 254.624)"),
        ],
        dark: &[
            ("primary", "oklch(0.546 0.245 262.881)"),
            ("primary-foreground", "oklch(0.97 0.014 254.604)"),
            ("ring", "oklch(0.488 0.243 264.376)"),
            ("sidebar-primary", "oklch(0.546 0.245 262.881)"),
            ("sidebar-primary-foreground", "oklch(0.97 0.014 254.604)"),
            ("sidebar-ring", "oklch(0.488 0.243 264.376)"),
        ],
    },
    ThemePalette {
        id: "green",
        label: "Green",
        light: &[
            ("primary", "oklch(0.648 0.2 131.684)"),
            ("primary-foreground", "oklch(0.986 0.031 120.757)"),
            ("ring", "oklch(0.841 0.238 128.85)"),
            ("sidebar-primary", "oklch(0.648 0.2 131.684)"),
            ("sidebar-primary-foreground", "oklch(0.986 0.031 120.757)"),
            ("sidebar-ring", "oklch(0.841 0.238 128.85)"),
        ],
        dark: &[
            ("primary", "oklch(0.648 0.2 131.684)"),
            ("primary-foreground", "oklch(0.986 0.031 120.757)"),
            ("ring", "oklch(0.405 0.101 131.063)"),
            ("sidebar-primary", "oklch(0.768 0.233 130.85)"),
            ("sidebar-primary-foreground", "oklch(0.986 0.031 120.757)"),
            ("sidebar-ring", "oklch(0.405 0.101 131.063)"),
        ],
    },
    ThemePalette {
        id: "orange",
        label: "Orange",
        light: &[
            ("primary", "oklch(0.646 0.222 41.116)"),
            ("primary-foreground", "oklch(0.98 0.016 73.684)"),
            ("ring", "oklch(0.75 0.183 55.934)"),
            ("sidebar-primary", "oklch(0.646 0.222 41.116)"),
            ("sidebar-primary-foreground", "oklch(0.98 0.016 73.684)"),
            ("sidebar-ring", "oklch(0.75 0.183 55.934)"),
        ],
        dark: &[
            ("primary", "oklch(0.705 0.213 47.604)"),
            ("primary-foreground", "oklch(0.98 0.016 73.684)"),
            ("ring", "oklch(0.408 0.123 38.172)"),
            ("sidebar-primary", "oklch(0.705 0.213 47.604)"),
            ("sidebar-primary-foreground", "oklch(0.98 0.016 73.684)"),
            ("sidebar-ring", "oklch(0.408 0.123 38.172)"),
        ],
    },
    ThemePalette {
        id: "red",
        label: "Red",
        light: &[
            ("primary", "oklch(0.577 0.245 27.325)"),
            ("primary-foreground", "oklch(0.971 0.013 17.38)"),
            ("ring", "oklch(0.704 0.191 22.216)"),
            ("sidebar-primary", "oklch(0.577 0.245 27.325)"),
            ("sidebar-primary-foreground", "oklch(0.971 0.013 17.38)"),
            ("sidebar-ring", "oklch(0.704 0.191 22.216)"),
        ],
        dark: &[
            ("primary", "oklch(0.637 0.237 25.331)"),
            ("primary-foreground", "oklch(0.971 0.013 17.38)"),
            ("ring", "oklch(0.396 0.141 25.723)"),
            ("sidebar-primary", "oklch(0.637 0.237 25.331)"),
            ("sidebar-primary-foreground", "oklch(0.971 0.013 17.38)"),
            ("sidebar-ring", "oklch(0.396 0.141 25.723)"),
        ],
    },
    ThemePalette {
        id: "rose",
        label: "Rose",
        light: &[
            ("primary", "oklch(0.586 0.253 17.585)"),
            ("primary-foreground", "oklch(0.969 0.015 12.422)"),
            ("ring", "oklch(0.712 0.194 13.428)"),
            ("sidebar-primary", "oklch(0.586 0.253 17.585)"),
            ("sidebar-primary-foreground", "oklch(0.969 0.015 12.422)"),
            ("sidebar-ring", "oklch(0.712 0.194 13.428)"),
        ],
        dark: &[
            ("primary", "oklch(0.645 0.246 16.439)"),
            ("primary-foreground", "oklch(0.969 0.015 12.422)"),
            ("ring", "oklch(0.41 0.159 10.272)"),
            ("sidebar-primary", "oklch(0.645 0.246 16.439)"),
            ("sidebar-primary-foreground", "oklch(0.969 0.015 12.422)"),
            ("sidebar-ring", "oklch(0.41 0.159 10.272)"),
        ],
    },
    ThemePalette {
        id: "violet",
        label: "Violet",
        light: &[
            ("primary", "oklch(0.541 0.281 293.009)"),
            ("primary-foreground", "oklch(0.969 0.016 293.756)"),
            ("ring", "oklch(0.702 0.183 293.541)"),
            ("sidebar-primary", "oklch(0.541 0.281 293.009)"),
            ("sidebar-primary-foreground", "oklch(0.969 0.016 293.756)"),
            ("sidebar-ring", "oklch(0.702 0.183 293.541)"),
        ],
        dark: &[
            ("primary", "oklch(0.606 0.25 292.717)"),
            ("primary-foreground", "oklch(0.969 0.016 293.756)"),
            ("ring", "oklch(0.38 0.189 293.745)"),
            ("sidebar-primary", "oklch(0.606 0.25 292.717)"),
            ("sidebar-primary-foreground", "oklch(0.969 0.016 293.756)"),
            ("sidebar-ring", "oklch(0.38 0.189 293.745)"),
        ],
    },
    ThemePalette {
        id: "yellow",
        label: "Yellow",
        light: &[
            ("primary", "oklch(0.795 0.184 86.047)"),
            ("primary-foreground", "oklch(0.421 0.095 57.708)"),
            ("ring", "oklch(0.852 0.199 91.936)"),
            ("sidebar-primary", "oklch(0.681 0.162 75.834)"),
            ("sidebar-primary-foreground", "oklch(0.987 0.026 102.212)"),
            ("sidebar-ring", "oklch(0.852 0.199 91.936)"),
        ],
        dark: &[
            ("primary", "oklch(0.795 0.184 86.047)"),
            ("primary-foreground", "oklch(0.421 0.095 57.708)"),
            ("ring", "oklch(0.421 0.095 57.708)"),
            ("sidebar-primary", "oklch(0.795 0.184 86.047)"),
            ("sidebar-primary-foreground", "oklch(0.987 0.026 102.212)"),
            ("sidebar-ring", "oklch(0.421 0.095 57.708)"),
        ],
    },
];

/// Looks up a named theme by id.
#[must_use]
pub fn find_named_theme(id: &str) -> Option<&'static ThemePalette> {
    NAMED_THEMES.iter().find(|theme| theme.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_theme_lookup() {
        assert_eq!(find_named_theme("violet").map(|t| t.label), Some("Violet"));
        assert!(find_named_theme("plaid").is_none());
        // The base palette is not selectable by id
        assert!(find_named_theme("default").is_none());
    }

    #[test]
    fn test_named_theme_ids_unique() {
        let mut ids: Vec<_> = NAMED_THEMES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAMED_THEMES.len());
    }

    #[test]
    fn test_modes_define_same_variables() {
        for theme in NAMED_THEMES.iter().chain(std::iter::once(&BASE_PALETTE)) {
            let light: Vec<_> = theme.light.iter().map(|(k, _)| *k).collect();
            let dark: Vec<_> = theme.dark.iter().map(|(k, _)| *k).collect();
            assert_eq!(light, dark, "theme {} differs between modes", theme.id);
        }
    }
}
