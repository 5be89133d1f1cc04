//! Style value types for concrete styles and aliases.

use console::Style;

/// A palette entry: either a concrete style or an alias to another entry.
///
/// Aliases let semantic names (`stripe`, `status_ok`) point at visual ones
/// (`muted`, `accent`) so a theme can restyle many columns at once.
///
/// ```rust
/// use gridstyle_render::Palette;
/// use console::Style;
///
/// let palette = Palette::new()
///     .add("muted", Style::new().dim())
///     .add("stripe", "muted");
/// assert!(palette.get("stripe").is_some());
/// ```
#[derive(Debug, Clone)]
pub enum StyleValue {
    /// A concrete style with actual formatting.
    Concrete(Style),
    /// An alias referencing another entry by name.
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}
