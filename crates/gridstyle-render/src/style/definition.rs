//! Style definitions as they appear in theme files.
//!
//! A style is either a mapping of attributes:
//!
//! ```yaml
//! header:
//!   fg: cyan
//!   bold: true
//! ```
//!
//! a shorthand string of attributes and a foreground color
//! (`warning: "yellow bold"`), or the name of another style (`stripe: muted`).

use console::Style;
use serde_yaml::Value;

use super::color::ColorDef;
use super::value::StyleValue;

const ATTRIBUTES: [&str; 5] = ["bold", "dim", "italic", "underline", "reverse"];

/// Parsed attributes of one style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDef {
    pub fg: Option<ColorDef>,
    pub bg: Option<ColorDef>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl StyleDef {
    /// Parses a style entry: a mapping, a shorthand string, or an alias.
    pub fn parse(value: &Value) -> Result<StyleValue, String> {
        match value {
            Value::Mapping(map) => {
                let mut def = StyleDef::default();
                for (key, attr) in map {
                    let key = key.as_str().ok_or_else(|| {
                        format!("style attribute name must be a string: {:?}", key)
                    })?;
                    match key {
                        "fg" => def.fg = Some(ColorDef::parse_value(attr)?),
                        "bg" => def.bg = Some(ColorDef::parse_value(attr)?),
                        _ if ATTRIBUTES.contains(&key) => {
                            let enabled = attr.as_bool().ok_or_else(|| {
                                format!("attribute '{}' must be true or false", key)
                            })?;
                            def.set_attribute(key, enabled);
                        }
                        _ => return Err(format!("unknown style attribute: {}", key)),
                    }
                }
                Ok(StyleValue::Concrete(def.to_style()))
            }
            Value::String(text) => Self::parse_shorthand(text),
            _ => Err(format!("invalid style definition: {:?}", value)),
        }
    }

    fn parse_shorthand(text: &str) -> Result<StyleValue, String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if let [single] = tokens.as_slice() {
            if !ATTRIBUTES.contains(single) && ColorDef::parse_string(single).is_err() {
                return Ok(StyleValue::Alias(single.to_string()));
            }
        }
        if tokens.is_empty() {
            return Err("empty style definition".to_string());
        }

        let mut def = StyleDef::default();
        for token in tokens {
            if ATTRIBUTES.contains(&token) {
                def.set_attribute(token, true);
            } else {
                def.fg = Some(
                    ColorDef::parse_string(token)
                        .map_err(|_| format!("unknown shorthand token '{}' in '{}'", token, text))?,
                );
            }
        }
        Ok(StyleValue::Concrete(def.to_style()))
    }

    fn set_attribute(&mut self, name: &str, enabled: bool) {
        match name {
            "bold" => self.bold = enabled,
            "dim" => self.dim = enabled,
            "italic" => self.italic = enabled,
            "underline" => self.underline = enabled,
            "reverse" => self.reverse = enabled,
            _ => {}
        }
    }

    /// Builds the `console::Style` for these attributes.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(bg) = &self.bg {
            style = style.bg(bg.to_console_color());
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        if self.reverse {
            style = style.reverse();
        }
        style
    }
}
