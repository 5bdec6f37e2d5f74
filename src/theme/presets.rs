//! Tweak presets: complete palettes exported from a theme editor.
//!
//! Unlike named themes, a preset replaces the whole palette, including fonts
//! and shadows. Variable names are stored without the leading `--`.

/// A predefined style-variable bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweakPreset {
    /// Identifier stored in `selectedTweakcnTheme`
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    /// Light mode variables
    pub light: &'static [(&'static str, &'static str)],
    /// Dark mode variables
    pub dark: &'static [(&'static str, &'static str)],
}

impl TweakPreset {
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

/// Available presets, in display order.
pub const TWEAK_PRESETS: &[TweakPreset] = &[
    TweakPreset {
        id: "modern-minimal",
        label: "Modern Minimal",
        light: &[
            ("background", "#ffffff"),
            ("foreground", "#333333"),
            ("card", "#ffffff"),
            ("card-foreground", "#333333"),
            ("primary", "#3b82f6"),
            ("primary-foreground", "#ffffff"),
            ("secondary", "#f3f4f6"),
            ("secondary-foreground", "#4b5563"),
            ("muted", "#f9fafb"),
            ("muted-foreground", "#6b7280"),
            ("accent", "#e0f2fe"),
            ("accent-foreground", "#1e3a8a"),
            ("border", "#e5e7eb"),
            ("ring", "#3b82f6"),
            ("sidebar", "#f9fafb"),
            ("sidebar-primary", "#3b82f6"),
            ("font-sans", "Inter, sans-serif"),
            ("shadow", "0 1px 3px 0px hsl(0 0% 0% / 0.10)"),
        ],
        dark: &[
            ("background", "#171717"),
            ("foreground", "#e5e5e5"),
            ("card", "#262626"),
            ("card-foreground", "#e5e5e5"),
            ("primary", "#3b82f6"),
            ("primary-foreground", "#ffffff"),
            ("secondary", "#262626"),
            ("secondary-foreground", "#e5e5e5"),
            ("muted", "#262626"),
            ("muted-foreground", "#a3a3a3"),
            ("accent", "#1e3a8a"),
            ("accent-foreground", "#bfdbfe"),
            ("border", "#404040"),
            ("ring", "#3b82f6"),
            ("sidebar", "#171717"),
            ("sidebar-primary", "#3b82f6"),
            ("font-sans", "Inter, sans-serif"),
            ("shadow", "0 1px 3px 0px hsl(0 0% 0% / 0.10)"),
        ],
    },
    TweakPreset {
        id: "claude",
        label: "Claude",
        light: &[
            ("background", "oklch(0.9818 0.0054 95.0986)"),
            ("foreground", "oklch(0.3438 0.0269 95.7226)"),
            ("card", "oklch(0.9818 0.0054 95.0986)"),
            ("card-foreground", "oklch(0.1908 0.0020 106.5859)"),
            ("primary", "oklch(0.6171 0.1375 39.0427)"),
            ("primary-foreground", "oklch(1.0000 0 0)"),
            ("secondary", "oklch(0.9245 0.0138 92.9892)"),
            ("secondary-foreground", "oklch(0.4334 0.0177 98.6048)"),
            ("muted", "oklch(0.9341 0.0153 90.2390)"),
            ("muted-foreground", "oklch(0.6059 0.0075 97.4233)"),
            ("accent", "oklch(0.9245 0.0138 92.9892)"),
            ("accent-foreground", "oklch(0.2671 0.0196 98.9390)"),
            ("border", "oklch(0.8847 0.0069 97.3627)"),
            ("ring", "oklch(0.6171 0.1375 39.0427)"),
            ("sidebar", "oklch(0.9663 0.0080 98.8792)"),
            ("sidebar-primary", "oklch(0.6171 0.1375 39.0427)"),
            ("font-sans", "ui-sans-serif, system-ui, sans-serif"),
            ("shadow", "0 1px 3px 0px hsl(0 0% 0% / 0.10)"),
        ],
        dark: &[
            ("background", "oklch(0.2679 0.0036 106.6427)"),
            ("foreground", "oklch(0.8074 0.0142 93.0137)"),
            ("card", "oklch(0.2679 0.0036 106.6427)"),
            ("card-foreground", "oklch(0.9818 0.0054 95.0986)"),
            ("primary", "oklch(0.6724 0.1308 38.7559)"),
            ("primary-foreground", "oklch(1.0000 0 0)"),
            ("secondary", "oklch(0.9818 0.0054 95.0986)"),
            ("secondary-foreground", "oklch(0.3085 0.0035 106.6039)"),
            ("muted", "oklch(0.2213 0.0038 106.7070)"),
            ("muted-foreground", "oklch(0.7713 0.0169 99.0657)"),
            ("accent", "oklch(0.2130 0.0078 95.4245)"),
            ("accent-foreground", "oklch(0.9663 0.0080 98.8792)"),
            ("border", "oklch(0.3618 0.0101 106.8928)"),
            ("ring", "oklch(0.6724 0.1308 38.7559)"),
            ("sidebar", "oklch(0.2357 0.0024 67.7077)"),
            ("sidebar-primary", "oklch(0.3250 0 0)"),
            ("font-sans", "ui-sans-serif, system-ui, sans-serif"),
            ("shadow", "0 1px 3px 0px hsl(0 0% 0% / 0.10)"),
        ],
    },
    TweakPreset {
        id: "vercel",
        label: "Vercel",
        light: &[
            ("background", "oklch(0.9900 0 0)"),
            ("foreground", "oklch(0 0 0)"),
            ("card", "oklch(1 0 0)"),
            ("card-foreground", "oklch(0 0 0)"),
            ("primary", "oklch(0 0 0)"),
            ("primary-foreground", "oklch(1 0 0)"),
            ("secondary", "oklch(0.9400 0 0)"),
            ("secondary-foreground", "oklch(0 0 0)"),
            ("muted", "oklch(0.9700 0 0)"),
            ("muted-foreground", "oklch(0.4400 0 0)"),
            ("accent", "oklch(0.9400 0 0)"),
            ("accent-foreground", "oklch(0 0 0)"),
            ("border", "oklch(0.9200 0 0)"),
            ("ring", "oklch(0 0 0)"),
            ("sidebar", "oklch(0.9900 0 0)"),
            ("sidebar-primary", "oklch(0 0 0)"),
            ("font-sans", "Geist, sans-serif"),
            ("shadow", "0px 1px 2px 0px hsl(0 0% 0% / 0.18)"),
        ],
        dark: &[
            ("background", "oklch(0 0 0)"),
            ("foreground", "oklch(1 0 0)"),
            ("card", "oklch(0.1400 0 0)"),
            ("card-foreground", "oklch(1 0 0)"),
            ("primary", "oklch(1 0 0)"),
            ("primary-foreground", "oklch(0 0 0)"),
            ("secondary", "oklch(0.2500 0 0)"),
            ("secondary-foreground", "oklch(1 0 0)"),
            ("muted", "oklch(0.2300 0 0)"),
            ("muted-foreground", "oklch(0.7200 0 0)"),
            ("accent", "oklch(0.3200 0 0)"),
            ("accent-foreground", "oklch(1 0 0)"),
            ("border", "oklch(0.2600 0 0)"),
            ("ring", "oklch(0.7200 0 0)"),
            ("sidebar", "oklch(0.1800 0 0)"),
            ("sidebar-primary", "oklch(1 0 0)"),
            ("font-sans", "Geist, sans-serif"),
            ("shadow", "0px 1px 2px 0px hsl(0 0% 0% / 0.18)"),
        ],
    },
    TweakPreset {
        id: "catppuccin",
        label: "Catppuccin",
        light: &[
            ("background", "#eff1f5"),
            ("foreground", "#4c4f69"),
            ("card", "#ffffff"),
            ("card-foreground", "#4c4f69"),
            ("primary", "#8839ef"),
            ("primary-foreground", "#ffffff"),
            ("secondary", "#ccd0da"),
            ("secondary-foreground", "#4c4f69"),
            ("muted", "#dce0e8"),
            ("muted-foreground", "#6c6f85"),
            ("accent", "#04a5e5"),
            ("accent-foreground", "#ffffff"),
            ("border", "#bcc0cc"),
            ("ring", "#8839ef"),
            ("sidebar", "#e6e9ef"),
            ("sidebar-primary", "#8839ef"),
            ("font-sans", "Montserrat, sans-serif"),
            ("shadow", "0px 4px 6px 0px hsl(240 30% 25% / 0.12)"),
        ],
        dark: &[
            ("background", "#181825"),
            ("foreground", "#cdd6f4"),
            ("card", "#1e1e2e"),
            ("card-foreground", "#cdd6f4"),
            ("primary", "#cba6f7"),
            ("primary-foreground", "#1e1e2e"),
            ("secondary", "#585b70"),
            ("secondary-foreground", "#cdd6f4"),
            ("muted", "#292c3c"),
            ("muted-foreground", "#a6adc8"),
            ("accent", "#89dceb"),
            ("accent-foreground", "#1e1e2e"),
            ("border", "#313244"),
            ("ring", "#cba6f7"),
            ("sidebar", "#11111b"),
            ("sidebar-primary", "#cba6f7"),
            ("font-sans", "Montserrat, sans-serif"),
            ("shadow", "0px 4px 6px 0px hsl(240 30% 25% / 0.12)"),
        ],
    },
    TweakPreset {
        id: "supabase",
        label: "Supabase",
        light: &[
            ("background", "oklch(0.9911 0 0)"),
            ("foreground", "oklch(0.2046 0 0)"),
            ("card", "oklch(0.9911 0 0)"),
            ("card-foreground", "oklch(0.2046 0 0)"),
            ("primary", "oklch(0.8348 0.1302 160.9080)"),
            ("primary-foreground", "oklch(0.2626 0.0147 166.4589)"),
            ("secondary", "oklch(0.9940 0 0)"),
            ("secondary-foreground", "oklch(0.2046 0 0)"),
            ("muted", "oklch(0.9461 0 0)"),
            ("muted-foreground", "oklch(0.2435 0 0)"),
            ("accent", "oklch(0.9461 0 0)"),
            ("accent-foreground", "oklch(0.2435 0 0)"),
            ("border", "oklch(0.9037 0 0)"),
            ("ring", "oklch(0.8348 0.1302 160.9080)"),
            ("sidebar", "oklch(0.9911 0 0)"),
            ("sidebar-primary", "oklch(0.8348 0.1302 160.9080)"),
            ("font-sans", "Outfit, sans-serif"),
            ("shadow", "0px 1px 3px 0px hsl(0 0% 0% / 0.17)"),
        ],
        dark: &[
            ("background", "oklch(0.1822 0 0)"),
            ("foreground", "oklch(0.9288 0.0126 255.5078)"),
            ("card", "oklch(0.2046 0 0)"),
            ("card-foreground", "oklch(0.9288 0.0126 255.5078)"),
            ("primary", "oklch(0.4365 0.1044 156.7556)"),
            ("primary-foreground", "oklch(0.9213 0.0135 167.1556)"),
            ("secondary", "oklch(0.2603 0 0)"),
            ("secondary-foreground", "oklch(0.9851 0 0)"),
            ("muted", "oklch(0.2393 0 0)"),
            ("muted-foreground", "oklch(0.7122 0 0)"),
            ("accent", "oklch(0.3132 0 0)"),
            ("accent-foreground", "oklch(0.9851 0 0)"),
            ("border", "oklch(0.2809 0 0)"),
            ("ring", "oklch(0.8003 0.1821 151.7110)"),
            ("sidebar", "oklch(0.1822 0 0)"),
            ("sidebar-primary", "oklch(0.4365 0.1044 156.7556)"),
            ("font-sans", "Outfit, sans-serif"),
            ("shadow", "0px 1px 3px 0px hsl(0 0% 0% / 0.17)"),
        ],
    },
    TweakPreset {
        id: "ocean-breeze",
        label: "Ocean Breeze",
        light: &[
            ("background", "#f0f8ff"),
            ("foreground", "#374151"),
            ("card", "#ffffff"),
            ("card-foreground", "#374151"),
            ("primary", "#22c55e"),
            ("primary-foreground", "#ffffff"),
            ("secondary", "#e0f2fe"),
            ("secondary-foreground", "#4b5563"),
            ("muted", "#f3f4f6"),
            ("muted-foreground", "#6b7280"),
            ("accent", "#d1fae5"),
            ("accent-foreground", "#374151"),
            ("border", "#e5e7eb"),
            ("ring", "#22c55e"),
            ("sidebar", "#e0f2fe"),
            ("sidebar-primary", "#22c55e"),
            ("font-sans", "DM Sans, sans-serif"),
            ("shadow", "0px 4px 8px -1px hsl(0 0% 0% / 0.10)"),
        ],
        dark: &[
            ("background", "#0f172a"),
            ("foreground", "#d1d5db"),
            ("card", "#1e293b"),
            ("card-foreground", "#d1d5db"),
            ("primary", "#34d399"),
            ("primary-foreground", "#0f172a"),
            ("secondary", "#2d3748"),
            ("secondary-foreground", "#a1a1aa"),
            ("muted", "#1e293b"),
            ("muted-foreground", "#6b7280"),
            ("accent", "#374151"),
            ("accent-foreground", "#a1a1aa"),
            ("border", "#4b5563"),
            ("ring", "#34d399"),
            ("sidebar", "#1e293b"),
            ("sidebar-primary", "#34d399"),
            ("font-sans", "DM Sans, sans-serif"),
            ("shadow", "0px 4px 8px -1px hsl(0 0% 0% / 0.10)"),
        ],
    },
];

/// Looks up a tweak preset by id.
#[must_use]
pub fn find_tweak_preset(id: &str) -> Option<&'static TweakPreset> {
    TWEAK_PRESETS.iter().find(|preset| preset.id == id)
}
