//! Reference table model: the row and column axes that selectors are
//! expressed against.
//!
//! An [`Axis`] is either flat (one label per position) or hierarchical
//! (several levels, one label per level per position). Flat axes are stored
//! as single-level axes so every consumer walks the same shape.
//!
//! ```
//! use gridstyle::{Axis, Label, ReferenceTable};
//!
//! let rows = Axis::flat(["apple", "pear", "apple"]);
//! let columns = Axis::hierarchical(vec![
//!     vec!["2023", "2023", "2024"],
//!     vec!["q1", "q2", "q1"],
//! ])
//! .unwrap();
//!
//! let table = ReferenceTable::new(rows, columns);
//! assert_eq!(table.header_rows(), 2);
//! assert_eq!(table.header_columns(), 1);
//! assert_eq!(table.columns().label(2), Some(Label::new(["2024", "q1"])));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::selection::Selection;

/// Identity of one axis position: one string per level.
///
/// Flat axes produce single-part labels, so `Label::from("x")` matches the
/// position labelled `x` on a flat axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "LabelRaw", into = "LabelRaw")]
pub struct Label(Vec<String>);

impl Label {
    /// Creates a label from its per-level parts.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Label(parts.into_iter().map(Into::into).collect())
    }

    /// The per-level parts of this label, outermost level first.
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Number of levels this label spans.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl From<&str> for Label {
    fn from(part: &str) -> Self {
        Label(vec![part.to_string()])
    }
}

impl From<String> for Label {
    fn from(part: String) -> Self {
        Label(vec![part])
    }
}

impl From<&String> for Label {
    fn from(part: &String) -> Self {
        Label(vec![part.clone()])
    }
}

impl<S: Into<String>> From<Vec<S>> for Label {
    fn from(parts: Vec<S>) -> Self {
        Label::new(parts)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Label {
    fn from(parts: [S; N]) -> Self {
        Label::new(parts)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LabelRaw {
    Single(String),
    Parts(Vec<String>),
}

impl From<LabelRaw> for Label {
    fn from(raw: LabelRaw) -> Self {
        match raw {
            LabelRaw::Single(part) => Label(vec![part]),
            LabelRaw::Parts(parts) => Label(parts),
        }
    }
}

impl From<Label> for LabelRaw {
    fn from(label: Label) -> Self {
        let mut parts = label.0;
        if parts.len() == 1 {
            LabelRaw::Single(parts.remove(0))
        } else {
            LabelRaw::Parts(parts)
        }
    }
}

/// One axis (rows or columns) of a reference table.
///
/// Every level holds exactly [`len`](Axis::len) labels. Duplicate labels are
/// allowed; selectors resolve them by consuming positions in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AxisRaw", into = "AxisRaw")]
pub struct Axis {
    levels: Vec<Vec<String>>,
}

impl Axis {
    /// Creates a flat axis from ordered labels.
    pub fn flat<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Axis {
            levels: vec![labels.into_iter().map(Into::into).collect()],
        }
    }

    /// Creates a hierarchical axis from its levels, outermost first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Configuration`] when no level is given or the
    /// levels differ in length.
    pub fn hierarchical<L, I, S>(levels: L) -> Result<Self>
    where
        L: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: Vec<Vec<String>> = levels
            .into_iter()
            .map(|level| level.into_iter().map(Into::into).collect())
            .collect();

        let Some(first) = levels.first() else {
            return Err(GridError::config("an axis needs at least one level"));
        };
        let len = first.len();
        if let Some((index, level)) = levels
            .iter()
            .enumerate()
            .find(|(_, level)| level.len() != len)
        {
            return Err(GridError::config(format!(
                "axis level {} has {} labels, expected {}",
                index,
                level.len(),
                len
            )));
        }

        Ok(Axis { levels })
    }

    /// Number of positions on the axis.
    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the axis has no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of label levels (1 for a flat axis).
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if the axis has more than one level.
    pub fn is_hierarchical(&self) -> bool {
        self.levels.len() > 1
    }

    /// The label sequence of one level.
    pub fn level(&self, index: usize) -> Option<&[String]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    /// All levels, outermost first.
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    /// The label at a zero-based position.
    pub fn label(&self, position: usize) -> Option<Label> {
        if position >= self.len() {
            return None;
        }
        Some(Label(
            self.levels
                .iter()
                .map(|level| level[position].clone())
                .collect(),
        ))
    }

    /// Labels of every position, in axis order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        (0..self.len()).filter_map(move |position| self.label(position))
    }

    /// Maps each distinct label to its positions, ascending.
    pub(crate) fn position_index(&self) -> HashMap<Label, Vec<usize>> {
        let mut index: HashMap<Label, Vec<usize>> = HashMap::new();
        for (position, label) in self.labels().enumerate() {
            index.entry(label).or_default().push(position);
        }
        index
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AxisRaw {
    Flat(Vec<String>),
    Levels(Vec<Vec<String>>),
}

impl TryFrom<AxisRaw> for Axis {
    type Error = GridError;

    fn try_from(raw: AxisRaw) -> Result<Self> {
        match raw {
            AxisRaw::Flat(labels) => Ok(Axis::flat(labels)),
            AxisRaw::Levels(levels) => Axis::hierarchical(levels),
        }
    }
}

impl From<Axis> for AxisRaw {
    fn from(axis: Axis) -> Self {
        let mut levels = axis.levels;
        if levels.len() == 1 {
            AxisRaw::Flat(levels.remove(0))
        } else {
            AxisRaw::Levels(levels)
        }
    }
}

/// The full-size table that position-based encodings are relative to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    rows: Axis,
    columns: Axis,
}

impl ReferenceTable {
    /// Creates a reference table from its row and column axes.
    pub fn new(rows: Axis, columns: Axis) -> Self {
        ReferenceTable { rows, columns }
    }

    /// The row axis.
    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    /// The column axis.
    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    /// Number of header rows in the target grid: one per column-label level.
    pub fn header_rows(&self) -> usize {
        self.columns.level_count()
    }

    /// Number of header columns in the target grid: one per row-label level.
    pub fn header_columns(&self) -> usize {
        self.rows.level_count()
    }

    /// A block selection covering the whole table.
    pub fn all(&self) -> Selection {
        self.block(0..self.rows.len(), 0..self.columns.len())
    }

    /// A block selection of the given zero-based position ranges.
    ///
    /// Ranges are clamped to the axis lengths.
    pub fn block(&self, rows: Range<usize>, columns: Range<usize>) -> Selection {
        Selection::Block {
            rows: slice_labels(&self.rows, rows),
            columns: slice_labels(&self.columns, columns),
        }
    }

    /// The row-vector at a zero-based row position.
    pub fn row(&self, position: usize) -> Option<Selection> {
        let name = self.rows.label(position)?;
        Some(Selection::Row {
            name,
            columns: self.columns.labels().collect(),
        })
    }

    /// The column-vector at a zero-based column position.
    pub fn column(&self, position: usize) -> Option<Selection> {
        let name = self.columns.label(position)?;
        Some(Selection::Column {
            name,
            rows: self.rows.labels().collect(),
        })
    }
}

fn slice_labels(axis: &Axis, range: Range<usize>) -> Vec<Label> {
    let end = range.end.min(axis.len());
    let start = range.start.min(end);
    (start..end).filter_map(|position| axis.label(position)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_axis_is_single_level() {
        let axis = Axis::flat(["a", "b", "a"]);
        assert_eq!(axis.len(), 3);
        assert_eq!(axis.level_count(), 1);
        assert!(!axis.is_hierarchical());
        assert_eq!(axis.label(2), Some(Label::from("a")));
        assert_eq!(axis.label(3), None);
    }

    #[test]
    fn hierarchical_axis_rejects_ragged_levels() {
        let err = Axis::hierarchical(vec![vec!["a", "b"], vec!["x"]]).unwrap_err();
        assert!(matches!(err, GridError::Configuration(_)));
        assert!(err.to_string().contains("level 1 has 1 labels, expected 2"));
    }

    #[test]
    fn hierarchical_axis_requires_a_level() {
        let levels: Vec<Vec<String>> = Vec::new();
        assert!(Axis::hierarchical(levels).is_err());
    }

    #[test]
    fn empty_axis() {
        let axis = Axis::flat(Vec::<String>::new());
        assert!(axis.is_empty());
        assert_eq!(axis.level_count(), 1);
        assert_eq!(axis.labels().count(), 0);
    }

    #[test]
    fn position_index_groups_duplicates() {
        let axis = Axis::flat(["a", "b", "a", "a"]);
        let index = axis.position_index();
        assert_eq!(index[&Label::from("a")], vec![0, 2, 3]);
        assert_eq!(index[&Label::from("b")], vec![1]);
    }

    #[test]
    fn hierarchical_labels_combine_levels() {
        let axis = Axis::hierarchical(vec![vec!["A", "A"], vec!["x", "y"]]).unwrap();
        let labels: Vec<Label> = axis.labels().collect();
        assert_eq!(labels, vec![Label::new(["A", "x"]), Label::new(["A", "y"])]);
        assert_eq!(labels[1].to_string(), "A/y");
    }

    #[test]
    fn header_counts_come_from_orthogonal_axis() {
        let table = ReferenceTable::new(
            Axis::hierarchical(vec![vec!["a"], vec!["b"], vec!["c"]]).unwrap(),
            Axis::flat(["x", "y"]),
        );
        assert_eq!(table.header_rows(), 1);
        assert_eq!(table.header_columns(), 3);
    }

    #[test]
    fn block_clamps_ranges() {
        let table = ReferenceTable::new(Axis::flat(["r1", "r2"]), Axis::flat(["c1", "c2"]));
        match table.block(1..10, 5..9) {
            Selection::Block { rows, columns } => {
                assert_eq!(rows, vec![Label::from("r2")]);
                assert!(columns.is_empty());
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn row_and_column_vectors() {
        let table = ReferenceTable::new(Axis::flat(["r1", "r2"]), Axis::flat(["c1", "c2"]));
        assert!(matches!(
            table.row(1),
            Some(Selection::Row { ref name, ref columns })
                if name == &Label::from("r2") && columns.len() == 2
        ));
        assert!(matches!(
            table.column(0),
            Some(Selection::Column { ref name, ref rows })
                if name == &Label::from("c1") && rows.len() == 2
        ));
        assert!(table.row(2).is_none());
    }

    #[test]
    fn axis_deserializes_flat_and_levels() {
        let flat: Axis = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(flat, Axis::flat(["a", "b"]));

        let levels: Axis = serde_json::from_str(r#"[["A", "A"], ["x", "y"]]"#).unwrap();
        assert_eq!(levels.level_count(), 2);

        let ragged: std::result::Result<Axis, _> = serde_json::from_str(r#"[["A", "A"], ["x"]]"#);
        assert!(ragged.is_err());
    }

    #[test]
    fn label_serializes_compactly() {
        assert_eq!(serde_json::to_string(&Label::from("a")).unwrap(), r#""a""#);
        assert_eq!(
            serde_json::to_string(&Label::new(["a", "b"])).unwrap(),
            r#"["a","b"]"#
        );
    }
}
