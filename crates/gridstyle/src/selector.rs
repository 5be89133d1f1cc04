//! Range-selector encoding.
//!
//! [`encode`] turns a [`Selection`] into the `"<rows> <cols> <applicator>"`
//! micro-language understood by the remote styling endpoint. Rows and
//! columns are 1-based grid positions; header rows and header columns occupy
//! the leading slots, so a data cell's position is shifted by the number of
//! label levels on the orthogonal axis.
//!
//! # Example
//!
//! ```
//! use gridstyle::{encode, Axis, EncodeOptions, ReferenceTable, Selection};
//!
//! let table = ReferenceTable::new(
//!     Axis::flat(["apple", "pear", "plum"]),
//!     Axis::flat(["price", "stock"]),
//! );
//!
//! let selection = Selection::block(["pear", "plum"], ["stock"]);
//! let selector = encode(&selection, "bg red", Some(&table), &EncodeOptions::new()).unwrap();
//! assert_eq!(selector.as_str(), "2,3 2 bg red");
//! ```
//!
//! # Duplicate labels
//!
//! A label that occurs several times on the reference axis resolves to the
//! lowest position not yet taken by an earlier occurrence in the same
//! selection. Selecting `["a", "a"]` on an axis `["a", "b", "a"]` therefore
//! yields positions 0 and 2, in that order.
//!
//! # Empty axes
//!
//! When either axis resolves to no positions and has no override, the whole
//! selector collapses to the empty string, even if the other axis has an
//! override.

use std::collections::HashMap;
use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{GridError, Result};
use crate::reference::{Axis, Label, ReferenceTable};
use crate::selection::{join_positions, AxisOverride, Selection};

/// An encoded selector: `"<rows> <cols> <applicator>"`, or empty when the
/// selection matched nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// The empty selector.
    pub fn empty() -> Self {
        Selector(String::new())
    }

    /// The selector text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the selection collapsed to nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the selector, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.0
    }
}

/// Overrides and offsets applied while encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Replaces the computed row positions.
    pub row_override: Option<AxisOverride>,
    /// Replaces the computed column positions.
    pub col_override: Option<AxisOverride>,
    /// Added to every zero-based row match.
    pub row_offset: i64,
    /// Added to every zero-based column match.
    pub col_offset: i64,
}

impl EncodeOptions {
    /// Options with no overrides and zero offsets.
    pub fn new() -> Self {
        EncodeOptions::default()
    }

    /// Sets the row override.
    pub fn row_override(mut self, positions: AxisOverride) -> Self {
        self.row_override = Some(positions);
        self
    }

    /// Sets the column override.
    pub fn col_override(mut self, positions: AxisOverride) -> Self {
        self.col_override = Some(positions);
        self
    }

    /// Sets the row offset.
    pub fn row_offset(mut self, offset: i64) -> Self {
        self.row_offset = offset;
        self
    }

    /// Sets the column offset.
    pub fn col_offset(mut self, offset: i64) -> Self {
        self.col_offset = offset;
        self
    }
}

/// Encodes a selection relative to `reference`.
///
/// Literal selections are returned as-is with the applicator appended and
/// need no reference.
///
/// # Errors
///
/// - [`GridError::Configuration`] `"no reference supplied"` when a
///   non-literal selection is encoded without a reference.
/// - [`GridError::Configuration`] `"no selectable rows"` /
///   `"no selectable columns"` when the selection has no labels on an axis
///   that has no override.
pub fn encode(
    selection: &Selection,
    applicator: &str,
    reference: Option<&ReferenceTable>,
    options: &EncodeOptions,
) -> Result<Selector> {
    let (row_labels, column_labels): (&[Label], &[Label]) = match selection {
        Selection::Literal(text) => return Ok(with_applicator(text.clone(), applicator)),
        Selection::Block { rows, columns } => (rows, columns),
        Selection::Row { name, columns } => (slice::from_ref(name), columns),
        Selection::Column { name, rows } => (rows, slice::from_ref(name)),
    };

    let reference = reference.ok_or_else(|| GridError::config("no reference supplied"))?;

    if row_labels.is_empty() && options.row_override.is_none() {
        return Err(GridError::config("no selectable rows"));
    }
    if column_labels.is_empty() && options.col_override.is_none() {
        return Err(GridError::config("no selectable columns"));
    }

    let rows = match &options.row_override {
        Some(positions) => positions.render(),
        None => join_positions(&locate(
            reference.rows(),
            row_labels,
            options.row_offset,
            reference.header_rows(),
        )),
    };
    let columns = match &options.col_override {
        Some(positions) => positions.render(),
        None => join_positions(&locate(
            reference.columns(),
            column_labels,
            options.col_offset,
            reference.header_columns(),
        )),
    };

    if rows.is_empty() || columns.is_empty() {
        debug!(
            rows = %rows,
            columns = %columns,
            "selection resolved to an empty axis, selector collapsed"
        );
        return Ok(Selector::empty());
    }

    Ok(with_applicator(format!("{} {}", rows, columns), applicator))
}

impl ReferenceTable {
    /// Encodes `selection` relative to this table.
    ///
    /// See [`encode`].
    pub fn encode(
        &self,
        selection: &Selection,
        applicator: &str,
        options: &EncodeOptions,
    ) -> Result<Selector> {
        encode(selection, applicator, Some(self), options)
    }
}

fn with_applicator(mut text: String, applicator: &str) -> Selector {
    if !applicator.is_empty() {
        text.push(' ');
        text.push_str(applicator);
    }
    Selector(text)
}

/// Resolves labels to 1-based grid positions on one axis.
///
/// `offset` shifts the zero-based match; shifted matches outside the axis are
/// dropped. `header_slots` is the number of header cells preceding the data.
fn locate(axis: &Axis, labels: &[Label], offset: i64, header_slots: usize) -> Vec<usize> {
    let len = axis.len() as i64;
    consume_matches(axis, labels)
        .into_iter()
        .filter_map(|matched| {
            let shifted = matched as i64 + offset;
            if shifted < 0 || shifted >= len {
                trace!(matched, offset, "shifted position falls outside the axis");
                return None;
            }
            Some(shifted as usize + header_slots)
        })
        .collect()
}

/// Maps each label to a zero-based axis position, in selection order.
///
/// Repeated labels take the lowest position not already consumed by an
/// earlier occurrence. Labels with no remaining match are skipped.
pub(crate) fn consume_matches(axis: &Axis, labels: &[Label]) -> Vec<usize> {
    let index = axis.position_index();
    let (matches, _) = labels.iter().fold(
        (Vec::with_capacity(labels.len()), HashMap::<&Label, usize>::new()),
        |(mut matches, mut consumed), label| {
            let taken = consumed.entry(label).or_insert(0);
            match index.get(label).and_then(|positions| positions.get(*taken)) {
                Some(&position) => {
                    *taken += 1;
                    matches.push(position);
                }
                None => trace!(%label, "label has no unconsumed match on the axis"),
            }
            (matches, consumed)
        },
    );
    matches
}
