//! # Gridstyle Render - Terminal Tables for Key/Value Records
//!
//! `gridstyle-render` lays out records (maps of column key to JSON value)
//! as aligned, ANSI-aware text tables that fit a target width.
//!
//! ## Core Concepts
//!
//! - [`ColumnSpec`]: which key a column reads, its header, value type,
//!   optional [`Transform`], alignment and [`Overflow`] policy
//! - [`render`]: records + columns + [`RenderOptions`] → text
//! - [`Theme`]: rule, border and ellipsis glyphs plus a [`Palette`] of
//!   named styles
//! - [`TableSpec`]: a column list and options loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use gridstyle_render::{records_from, render, ColumnSpec, RenderOptions, Theme};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Plot { id: String, kind: String, points: u32 }
//!
//! let plots = vec![
//!     Plot { id: "p-1".into(), kind: "scatter".into(), points: 120 },
//!     Plot { id: "p-2".into(), kind: "histogram".into(), points: 8 },
//! ];
//!
//! let columns = vec![
//!     ColumnSpec::new("id").header("ID").keep(),
//!     ColumnSpec::new("kind").header("Kind"),
//!     ColumnSpec::new("points").header("Points").number(),
//! ];
//!
//! let options = RenderOptions::new().target_width(40).theme(Theme::plain());
//! let table = render(&records_from(&plots).unwrap(), &columns, &options);
//!
//! assert_eq!(
//!     table,
//!     " ID  │ Kind      │ Points \n\
//!      ──────────────────────────\n\
//!      \u{20}p-1 │ scatter   │    120 \n\
//!      \u{20}p-2 │ histogram │      8 "
//! );
//! ```
//!
//! ## Styled Cells
//!
//! A transform receives the raw value and the theme palette, and may return
//! styled text. Escape codes never count toward column width.
//!
//! ```rust
//! use gridstyle_render::{render, ColumnSpec, RenderOptions, Theme};
//! use console::Style;
//! use serde_json::json;
//!
//! let theme = Theme::new().add("failed", Style::new().red().bold());
//! let status = ColumnSpec::new("status").transform(|value, palette| {
//!     let text = value.as_str().unwrap_or("?");
//!     if text == "failed" { palette.paint("failed", text) } else { text.to_string() }
//! });
//!
//! let records = vec![json!({"status": "failed"}).as_object().unwrap().clone()];
//! let table = render(&records, &[status], &RenderOptions::new().theme(theme));
//! assert!(console::strip_ansi_codes(&table).contains("failed"));
//! ```
//!
//! ## YAML Configuration
//!
//! ```rust
//! use gridstyle_render::{TableSpec, Theme};
//!
//! let theme = Theme::from_yaml(r#"
//! border: " | "
//! styles:
//!   header: {fg: cyan, bold: true}
//!   stripe: {bg: 236}
//! "#).unwrap();
//!
//! let spec = TableSpec::from_yaml(r#"
//! striped: true
//! columns:
//!   - {key: name, overflow: keep}
//!   - {key: tags, type: list, overflow: shrink}
//! "#).unwrap();
//!
//! let output = spec.render(&[], theme);
//! assert!(output.contains("name"));
//! ```
//!
//! Rendering never fails: missing keys become blank cells. Errors come only
//! from loading configuration or converting typed rows, as [`RenderError`].

mod error;
pub mod style;
pub mod tabular;
pub mod theme;

pub use error::RenderError;

pub use style::{ColorDef, StyleDef, StyleValue};
pub use tabular::{
    records_from, render, Align, ColumnSpec, Overflow, Record, RenderOptions, Table, TableSpec,
    Transform, ValueType,
};
pub use theme::{Palette, Theme};
