//! Theme struct: table glyphs plus a palette of named styles.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use gridstyle_render::Theme;
//! use console::Style;
//!
//! let theme = Theme::new()
//!     .border(" | ")
//!     .add("muted", Style::new().dim())
//!     .add("stripe", "muted");
//! assert_eq!(theme.border_glyph(), " | ");
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use gridstyle_render::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! name: ocean
//! rule: "="
//! styles:
//!   header:
//!     fg: cyan
//!     bold: true
//!   muted:
//!     dim: true
//!   stripe: muted
//!   warning: "yellow bold"
//! "#).unwrap();
//! assert_eq!(theme.name(), Some("ocean"));
//! assert_eq!(theme.rule_glyph(), "=");
//! ```
//!
//! Glyphs left out of the document keep their defaults; `styles` entries
//! are layered over the default palette.

use console::Style;
use serde::Deserialize;

use crate::error::RenderError;
use crate::style::{StyleDef, StyleValue};

use super::palette::Palette;

/// Palette name used for header labels.
pub const HEADER_STYLE: &str = "header";
/// Palette name used for every second data row when striping.
pub const STRIPE_STYLE: &str = "stripe";

/// Glyphs and styles used to draw a table.
#[derive(Debug, Clone)]
pub struct Theme {
    name: Option<String>,
    rule: String,
    border: String,
    ellipsis: String,
    palette: Palette,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: Option<String>,
    rule: Option<String>,
    border: Option<String>,
    ellipsis: Option<String>,
    #[serde(default)]
    styles: serde_yaml::Mapping,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            name: None,
            rule: "─".to_string(),
            border: "│".to_string(),
            ellipsis: "…".to_string(),
            palette: Palette::new()
                .add(HEADER_STYLE, Style::new().bold())
                .add(STRIPE_STYLE, Style::new().dim()),
        }
    }
}

impl Theme {
    /// The default theme: box-drawing glyphs, bold headers, dim stripes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default glyphs with an empty palette: output carries no styling.
    pub fn plain() -> Self {
        Theme {
            palette: Palette::new(),
            ..Self::default()
        }
    }

    /// Creates a theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Yaml`] for malformed documents and
    /// [`RenderError::Theme`] for invalid colors or style attributes.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let file: ThemeFile = serde_yaml::from_str(yaml)?;
        let mut theme = Self::default();
        theme.name = file.name;
        if let Some(rule) = file.rule {
            theme.rule = rule;
        }
        if let Some(border) = file.border {
            theme.border = border;
        }
        if let Some(ellipsis) = file.ellipsis {
            theme.ellipsis = ellipsis;
        }
        for (key, value) in &file.styles {
            let name = key.as_str().ok_or_else(|| {
                RenderError::Theme(format!("style name must be a string: {:?}", key))
            })?;
            let style = StyleDef::parse(value)
                .map_err(|message| RenderError::Theme(format!("style '{}': {}", name, message)))?;
            theme.palette.insert(name, style);
        }
        Ok(theme)
    }

    /// Sets the theme name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the glyph repeated across the header separator line.
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Sets the string drawn between columns.
    pub fn border(mut self, border: impl Into<String>) -> Self {
        self.border = border.into();
        self
    }

    /// Sets the marker appended to truncated cells.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Adds a named style or alias to the palette.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.palette.insert(name, value);
        self
    }

    /// Theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The separator-line glyph.
    pub fn rule_glyph(&self) -> &str {
        &self.rule
    }

    /// The column border.
    pub fn border_glyph(&self) -> &str {
        &self.border
    }

    /// The truncation marker.
    pub fn ellipsis_glyph(&self) -> &str {
        &self.ellipsis
    }

    /// Named styles, as handed to value transforms.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
