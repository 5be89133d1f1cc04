//! Gridstyle - position-based styling instructions for remote tables.
//!
//! A remote grid styles cells through a compact micro-language:
//! `"<rows> <cols> <applicator>"`, where rows and columns are 1-based grid
//! positions or `start:end` ranges and the applicator is an opaque styling
//! payload. Gridstyle builds those strings from label-based selections:
//!
//! - [`ReferenceTable`]: the row and column axes of the full table, flat or
//!   hierarchical
//! - [`Selection`]: a block, row-vector, column-vector, or literal selector
//! - [`encode`]: selection + reference → [`Selector`]
//! - [`merge_instructions`]: runs of equal labels → cell-merge ranges
//!
//! # Quick Start
//!
//! ```rust
//! use gridstyle::{encode, Axis, AxisOverride, EncodeOptions, ReferenceTable, Selection};
//!
//! let table = ReferenceTable::new(
//!     Axis::flat(["north", "south", "east", "west"]),
//!     Axis::hierarchical(vec![
//!         vec!["2024", "2024", "2025"],
//!         vec!["sales", "costs", "sales"],
//!     ])
//!     .unwrap(),
//! );
//!
//! // Two header rows (one per column level), one header column.
//! let selection = Selection::block(["south", "west"], [["2025", "sales"]]);
//! let selector = table.encode(&selection, "bg yellow", &EncodeOptions::new()).unwrap();
//! assert_eq!(selector.as_str(), "3,5 3 bg yellow");
//!
//! // Overrides replace the computed positions of one axis.
//! let options = EncodeOptions::new().row_override(AxisOverride::parse("1:2").unwrap());
//! let selector = encode(&selection, "bold", Some(&table), &options).unwrap();
//! assert_eq!(selector.as_str(), "1:2 3 bold");
//!
//! // Literal selections bypass encoding entirely.
//! let literal = encode(&Selection::literal("1:9 1"), "fg red", None, &options).unwrap();
//! assert_eq!(literal.as_str(), "1:9 1 fg red");
//!
//! // Column headers spanning several columns become merges.
//! assert_eq!(table.column_merge_instructions(None), "1:2 0 lbl1");
//! ```
//!
//! # Position Arithmetic
//!
//! | Axis | 1-based position |
//! |------|------------------|
//! | Row | zero-based match + column-label levels + `row_offset` |
//! | Column | zero-based match + row-label levels + `col_offset` |
//!
//! Matches whose offset-shifted index falls outside the reference axis are
//! dropped. When an axis ends up with no positions and has no override, the
//! selector is empty.

mod error;
mod merge;
mod reference;
mod selection;
mod selector;

// Re-export public API
pub use error::{GridError, Result};
pub use merge::{
    first_row_of_run, last_row_of_run, merge_instructions, merge_instructions_with, merge_ranges,
    MergeRange, TagCounter,
};
pub use reference::{Axis, Label, ReferenceTable};
pub use selection::{AxisOverride, Selection};
pub use selector::{encode, EncodeOptions, Selector};
