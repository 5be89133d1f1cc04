//! Named styles available to the renderer and to value transforms.

use std::collections::HashMap;

use console::Style;
use tracing::trace;

use crate::style::StyleValue;

/// Longest alias chain followed before giving up.
const MAX_ALIAS_DEPTH: usize = 16;

/// A lookup of style names to `console::Style`, with aliases.
///
/// Transforms receive the palette so they can color parts of a cell:
///
/// ```rust
/// use gridstyle_render::Palette;
/// use console::Style;
///
/// let palette = Palette::new().add("ok", Style::new().green());
/// let painted = palette.paint("ok", "done");
/// assert_eq!(console::strip_ansi_codes(&painted), "done");
/// assert_eq!(palette.paint("missing", "done"), "done");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    styles: HashMap<String, Style>,
    aliases: HashMap<String, String>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style or alias, returning the palette for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a style or alias in place. Replaces any previous entry.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) {
        match value.into() {
            StyleValue::Concrete(style) => {
                self.aliases.remove(name);
                self.styles.insert(name.to_string(), style);
            }
            StyleValue::Alias(target) => {
                self.styles.remove(name);
                self.aliases.insert(name.to_string(), target);
            }
        }
    }

    /// Resolves a name, following aliases. Dangling or cyclic aliases
    /// resolve to `None`.
    pub fn get(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        for _ in 0..=MAX_ALIAS_DEPTH {
            if let Some(style) = self.styles.get(current) {
                return Some(style);
            }
            current = self.aliases.get(current)?.as_str();
        }
        trace!(name, "alias chain too deep, treating style as missing");
        None
    }

    /// Returns `true` if `name` resolves to a style.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Applies the named style to `text`. Unknown names leave it unchanged.
    pub fn paint(&self, name: &str, text: &str) -> String {
        match self.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Number of entries, aliases included.
    pub fn len(&self) -> usize {
        self.styles.len() + self.aliases.len()
    }

    /// Returns `true` if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.aliases.is_empty()
    }
}
