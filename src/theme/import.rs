//! Parsing of user-imported themes.
//!
//! Two input shapes are accepted:
//!
//! - JSON: `{ "light": {...}, "dark": {...} }`, optionally wrapped in
//!   `{ "cssVars": ... }` as theme editors export it
//! - CSS: a `:root { ... }` block and a `.dark { ... }` block of
//!   custom-property declarations
//!
//! Keys are stored without the leading `--`. Values are kept verbatim; no
//! schema validation is performed.

use crate::models::ImportedTheme;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(:root|\.dark)\s*\{([^}]*)\}").expect("valid block regex")
});

static DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--([A-Za-z0-9_-]+)\s*:\s*([^;]+?)\s*(?:;|$)").expect("valid declaration regex")
});

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportedTheme {
    css_vars: ImportedTheme,
}

/// Parses an imported theme from JSON or CSS text.
///
/// # Errors
///
/// Returns an error if the input is invalid JSON (when it looks like JSON)
/// or if it contains no style variables at all.
pub fn parse_theme(input: &str) -> Result<ImportedTheme> {
    let trimmed = input.trim();

    let theme = if trimmed.starts_with('{') {
        parse_json(trimmed)?
    } else {
        parse_css(trimmed)
    };

    if theme.is_empty() {
        anyhow::bail!("No style variables found in imported theme");
    }

    Ok(theme)
}

fn parse_json(input: &str) -> Result<ImportedTheme> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("Imported theme is not valid JSON")?;

    let theme = if value.get("cssVars").is_some() {
        serde_json::from_value::<ExportedTheme>(value)
            .context("Invalid cssVars section in imported theme")?
            .css_vars
    } else {
        serde_json::from_value(value).context("Imported theme must map modes to variables")?
    };

    Ok(ImportedTheme {
        light: strip_prefixes(theme.light),
        dark: strip_prefixes(theme.dark),
    })
}

/// Extracts `:root` and `.dark` custom properties from CSS text.
///
/// Later declarations of the same variable win, as they would in a browser.
#[must_use]
pub fn parse_css(input: &str) -> ImportedTheme {
    let mut theme = ImportedTheme::default();

    for block in BLOCK_RE.captures_iter(input) {
        let target = if &block[1] == ".dark" {
            &mut theme.dark
        } else {
            &mut theme.light
        };

        for decl in DECL_RE.captures_iter(&block[2]) {
            target.insert(decl[1].to_string(), decl[2].trim().to_string());
        }
    }

    theme
}

fn strip_prefixes(vars: BTreeMap<String, String>) -> BTreeMap<String, String> {
    vars.into_iter()
        .map(|(k, v)| match k.strip_prefix("--") {
            Some(bare) => (bare.to_string(), v),
            None => (k, v),
        })
        .collect()
}
