//! Unicode-aware, width-negotiated terminal tables.
//!
//! Tables are built from plain key/value [`Record`]s and a list of
//! [`ColumnSpec`]s. Widths are measured from the data, then negotiated
//! against a target width according to each column's [`Overflow`] policy.
//! Wide characters count as two columns and ANSI escape codes count as
//! none, so cells styled by a [`Transform`] line up like plain ones.
//!
//! ```rust
//! use gridstyle_render::tabular::{render, ColumnSpec, RenderOptions};
//! use gridstyle_render::Theme;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "report.pdf", "size": 2048, "tags": ["work", "q3"]}),
//!     json!({"name": "notes.txt", "size": 12}),
//! ]
//! .into_iter()
//! .filter_map(|v| v.as_object().cloned())
//! .collect::<Vec<_>>();
//!
//! let columns = vec![
//!     ColumnSpec::new("name").header("Name").keep(),
//!     ColumnSpec::new("size").header("Size").number(),
//!     ColumnSpec::new("tags").header("Tags").list().shrink(),
//! ];
//!
//! let options = RenderOptions::new().target_width(60).theme(Theme::plain());
//! let table = render(&records, &columns, &options);
//! assert!(table.contains("work, q3"));
//! ```
//!
//! ## Overflow Policies
//!
//! - [`Overflow::Keep`] - never narrowed; the row may exceed the target
//! - [`Overflow::Shrink`] - narrowed first, down to the header width; wraps
//! - [`Overflow::Truncate`] - narrowed last; cut with the theme's ellipsis
//!
//! ## Utility Functions
//!
//! ```rust
//! use gridstyle_render::tabular::{display_width, truncate_end, pad_right, wrap};
//!
//! let text = "Hello World";
//! let truncated = truncate_end(text, 8, "…");  // "Hello W…"
//! let padded = pad_right(&truncated, 10);      // "Hello W…  "
//! assert_eq!(display_width(&padded), 10);
//!
//! let lines = wrap("hello world foo bar", 11);
//! assert_eq!(lines, vec!["hello world", "foo bar"]);
//! ```

mod resolve;
mod table;
mod types;
mod util;

pub use resolve::default_target_width;
pub use table::{records_from, render, Record, Table};
pub use types::{
    Align, ColumnSpec, Overflow, RenderOptions, TableSpec, Transform, ValueType,
};
pub use util::{display_width, pad_center, pad_left, pad_right, truncate_end, wrap};
