//! Core types for table configuration.
//!
//! This module defines the data structures used to specify table layout:
//! column specs, value types, alignment, overflow policies, and the
//! per-render options.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;
use crate::theme::{Palette, Theme};

use super::table::{render, Record};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// How a column gives up space when the table is wider than its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Never narrowed. The row may exceed the target width.
    Keep,
    /// Narrowed after `Shrink` columns; content is cut with an ellipsis.
    #[default]
    Truncate,
    /// Narrowed first, down to the header width; content wraps.
    Shrink,
}

/// How a raw record value becomes cell text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Strings unquoted, `null` blank, other values as compact JSON.
    #[default]
    Text,
    /// Like `Text`, right-aligned unless the column says otherwise.
    Number,
    /// `✓` for truthy values, blank otherwise.
    Flag,
    /// Array items joined with `", "`.
    List,
}

impl ValueType {
    /// Converts a raw value to display text.
    ///
    /// ```rust
    /// use gridstyle_render::tabular::ValueType;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueType::Text.stringify(&json!("apple")), "apple");
    /// assert_eq!(ValueType::Text.stringify(&json!(null)), "");
    /// assert_eq!(ValueType::Flag.stringify(&json!(true)), "✓");
    /// assert_eq!(ValueType::List.stringify(&json!(["a", 1])), "a, 1");
    /// ```
    pub fn stringify(&self, value: &Value) -> String {
        match self {
            ValueType::Text | ValueType::Number => scalar_text(value),
            ValueType::Flag => {
                if is_truthy(value) {
                    "✓".to_string()
                } else {
                    String::new()
                }
            }
            ValueType::List => match value {
                Value::Array(items) => items
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(", "),
                other => scalar_text(other),
            },
        }
    }

    /// Alignment used when the column does not set one.
    pub fn default_align(&self) -> Align {
        match self {
            ValueType::Number => Align::Right,
            _ => Align::Left,
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

type TransformFn = dyn Fn(&Value, &Palette) -> String + Send + Sync;

/// A custom cell formatter: `(raw value, palette) -> cell text`.
///
/// The returned text may carry ANSI styling; width calculations ignore it.
#[derive(Clone)]
pub struct Transform(Arc<TransformFn>);

impl Transform {
    /// Wraps a formatting closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Palette) -> String + Send + Sync + 'static,
    {
        Transform(Arc::new(f))
    }

    /// Formats one value.
    pub fn apply(&self, value: &Value, palette: &Palette) -> String {
        (self.0)(value, palette)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Configuration for a single column in a table.
///
/// ```rust
/// use gridstyle_render::tabular::{ColumnSpec, Overflow};
///
/// let column = ColumnSpec::new("size").header("Size").number().keep();
/// assert_eq!(column.header_label(), "Size");
/// assert_eq!(column.overflow, Overflow::Keep);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Record key the cell value is read from.
    pub key: String,
    /// Header label; the key is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// How raw values are stringified.
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
    /// Custom formatter, replacing `value_type` stringification.
    #[serde(skip)]
    pub transform: Option<Transform>,
    /// Narrowing policy under width pressure.
    #[serde(default)]
    pub overflow: Overflow,
    /// Alignment; defaults from the value type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Suppress the border after this column.
    #[serde(default)]
    pub no_border: bool,
    /// Suppress the one-space padding around this column's cells.
    #[serde(default)]
    pub no_padding: bool,
}

impl ColumnSpec {
    /// A text column reading `key`, truncated under width pressure.
    pub fn new(key: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            header: None,
            value_type: ValueType::default(),
            transform: None,
            overflow: Overflow::default(),
            align: None,
            no_border: false,
            no_padding: false,
        }
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the value type.
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Shorthand for `.value_type(ValueType::Number)`.
    pub fn number(self) -> Self {
        self.value_type(ValueType::Number)
    }

    /// Shorthand for `.value_type(ValueType::Flag)`.
    pub fn flag(self) -> Self {
        self.value_type(ValueType::Flag)
    }

    /// Shorthand for `.value_type(ValueType::List)`.
    pub fn list(self) -> Self {
        self.value_type(ValueType::List)
    }

    /// Set a custom formatter.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Palette) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Transform::new(f));
        self
    }

    /// Set the overflow policy.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Shorthand for `.overflow(Overflow::Keep)`.
    pub fn keep(self) -> Self {
        self.overflow(Overflow::Keep)
    }

    /// Shorthand for `.overflow(Overflow::Truncate)`.
    pub fn truncate(self) -> Self {
        self.overflow(Overflow::Truncate)
    }

    /// Shorthand for `.overflow(Overflow::Shrink)`.
    pub fn shrink(self) -> Self {
        self.overflow(Overflow::Shrink)
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Shorthand for `.align(Align::Center)`.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Drop the border after this column.
    pub fn no_border(mut self) -> Self {
        self.no_border = true;
        self
    }

    /// Drop the padding around this column's cells.
    pub fn no_padding(mut self) -> Self {
        self.no_padding = true;
        self
    }

    /// The header text: `header` if set, else the key.
    pub fn header_label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.key)
    }

    /// The alignment actually used.
    pub fn effective_align(&self) -> Align {
        self.align.unwrap_or_else(|| self.value_type.default_align())
    }

    /// Cell text for a present value: the transform if set, else the
    /// value type's stringification.
    pub fn format(&self, value: &Value, palette: &Palette) -> String {
        match &self.transform {
            Some(transform) => transform.apply(value, palette),
            None => self.value_type.stringify(value),
        }
    }
}

/// Per-render options.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Apply the stripe style to every second data row.
    pub striped: bool,
    /// Width to fit the table into; probed from the terminal when unset.
    pub target_width: Option<usize>,
    /// Glyphs and styles.
    pub theme: Theme,
}

impl RenderOptions {
    /// Unstriped, terminal-width, default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable striping.
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Fix the target width.
    pub fn target_width(mut self, width: usize) -> Self {
        self.target_width = Some(width);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// A column list plus options, loadable from YAML or JSON.
///
/// ```rust
/// use gridstyle_render::tabular::{Overflow, TableSpec};
///
/// let spec = TableSpec::from_yaml(r#"
/// striped: true
/// width: 60
/// columns:
///   - key: id
///     overflow: keep
///   - key: size
///     header: Size
///     type: number
/// "#).unwrap();
/// assert_eq!(spec.columns.len(), 2);
/// assert_eq!(spec.columns[0].overflow, Overflow::Keep);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub striped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

impl TableSpec {
    /// A spec with the given columns and default options.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        TableSpec {
            columns,
            striped: false,
            width: None,
        }
    }

    /// Loads a spec from YAML.
    ///
    /// # Errors
    ///
    /// [`RenderError::Yaml`] for malformed documents, [`RenderError::Spec`]
    /// for documents that parse but describe an unusable table.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let spec: TableSpec = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Loads a spec from JSON. See [`TableSpec::from_yaml`].
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let spec: TableSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.columns.is_empty() {
            return Err(RenderError::Spec("table has no columns".to_string()));
        }
        if let Some(position) = self.columns.iter().position(|c| c.key.is_empty()) {
            return Err(RenderError::Spec(format!(
                "column {} has an empty key",
                position + 1
            )));
        }
        if self.width == Some(0) {
            return Err(RenderError::Spec("width must be positive".to_string()));
        }
        Ok(())
    }

    /// Render options from this spec's settings and the given theme.
    pub fn options(&self, theme: Theme) -> RenderOptions {
        RenderOptions {
            striped: self.striped,
            target_width: self.width,
            theme,
        }
    }

    /// Renders `records` with this spec and the given theme.
    pub fn render(&self, records: &[Record], theme: Theme) -> String {
        render(records, &self.columns, &self.options(theme))
    }
}
