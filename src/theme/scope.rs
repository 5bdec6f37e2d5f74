//! Style scopes: where resolved style variables end up.

use crate::theme::palettes::BASE_PALETTE;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Target of style-variable assignments (the document root in a browser).
pub trait StyleScope {
    /// Sets an inline property, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);

    /// Removes an inline property. Removing an unset property is a no-op.
    fn remove_property(&mut self, name: &str);

    /// Returns the inline value of a property.
    fn property(&self, name: &str) -> Option<&str>;

    /// Removes every inline property.
    fn clear(&mut self);

    /// Toggles the dark-mode marker (the `.dark` class on the root element).
    fn set_dark(&mut self, dark: bool);
}

/// In-memory document root: the base stylesheet plus inline overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    dark: bool,
    inline: BTreeMap<String, String>,
}

impl DocumentStyle {
    /// Creates a light-mode document with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the dark marker is set.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// Inline overrides currently set.
    #[must_use]
    pub const fn inline(&self) -> &BTreeMap<String, String> {
        &self.inline
    }

    /// Effective value of every custom property: base palette for the
    /// current mode, then inline overrides.
    #[must_use]
    pub fn computed(&self) -> BTreeMap<String, String> {
        let mut values: BTreeMap<String, String> = BASE_PALETTE
            .variables(self.dark)
            .iter()
            .map(|(name, value)| (format!("--{name}"), (*value).to_string()))
            .collect();
        values.extend(self.inline.iter().map(|(k, v)| (k.clone(), v.clone())));
        values
    }

    /// Renders the computed style as a `:root` rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.computed() {
            // Writing to a String cannot fail
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleScope for DocumentStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.inline.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.inline.remove(name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.inline.get(name).map(String::as_str)
    }

    fn clear(&mut self) {
        self.inline.clear();
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}
