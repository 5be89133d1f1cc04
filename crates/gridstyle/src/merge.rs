//! Merge instructions for hierarchical axes.
//!
//! Consecutive equal labels at one level of an axis form a *run*. Runs of
//! two or more positions become merge ranges so the remote grid can span a
//! single header cell across them:
//!
//! ```
//! use gridstyle::{merge_instructions, Axis};
//!
//! let axis = Axis::hierarchical(vec![
//!     vec!["A", "A", "B", "B", "C"],
//!     vec!["X", "Y", "Z", "W", "V"],
//! ])
//! .unwrap();
//!
//! assert_eq!(merge_instructions(&axis, 1), "1:2 0 lbl1\n3:4 0 lbl2");
//! ```
//!
//! Tags (`lbl1`, `lbl2`, ...) are numbered by a [`TagCounter`] that spans
//! the whole call. Pass the same counter to [`merge_instructions_with`] for
//! both axes of a table to keep tags unique across them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, Result};
use crate::reference::{Axis, ReferenceTable};

/// Issues synthetic merge tags: `lbl1`, `lbl2`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagCounter {
    next: usize,
}

impl TagCounter {
    /// A counter whose first tag is `lbl1`.
    pub fn new() -> Self {
        TagCounter { next: 1 }
    }

    /// Returns the next tag.
    pub fn next_tag(&mut self) -> String {
        let tag = format!("lbl{}", self.next);
        self.next += 1;
        tag
    }

    /// Number of tags issued so far.
    pub fn issued(&self) -> usize {
        self.next - 1
    }
}

impl Default for TagCounter {
    fn default() -> Self {
        TagCounter::new()
    }
}

/// One cell-merge range: `"<start>:<end> <level> <tag>"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRange {
    /// First position, 1-based and offset-adjusted.
    pub start: usize,
    /// Last position, inclusive.
    pub end: usize,
    /// Zero-based label level the run belongs to.
    pub level: usize,
    /// Synthetic tag naming the merged cell.
    pub tag: String,
}

impl fmt::Display for MergeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {}", self.start, self.end, self.level, self.tag)
    }
}

/// A maximal span of equal labels, zero-based and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
}

impl Run {
    fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

fn runs(labels: &[String]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;
    for position in 1..=labels.len() {
        if position == labels.len() || labels[position] != labels[start] {
            runs.push(Run {
                start,
                end: position - 1,
            });
            start = position;
        }
    }
    runs
}

/// Merge ranges for every run of length two or more, level by level.
pub fn merge_ranges(axis: &Axis, offset: usize, tags: &mut TagCounter) -> Vec<MergeRange> {
    let mut ranges = Vec::new();
    for (level, labels) in axis.levels().iter().enumerate() {
        for run in runs(labels).into_iter().filter(|run| run.len() >= 2) {
            ranges.push(MergeRange {
                start: run.start + offset,
                end: run.end + offset,
                level,
                tag: tags.next_tag(),
            });
        }
    }
    debug!(
        positions = axis.len(),
        levels = axis.level_count(),
        merges = ranges.len(),
        "computed merge ranges"
    );
    ranges
}

/// Newline-joined merge instructions, numbering tags with `tags`.
pub fn merge_instructions_with(axis: &Axis, offset: usize, tags: &mut TagCounter) -> String {
    merge_ranges(axis, offset, tags)
        .iter()
        .map(MergeRange::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Newline-joined merge instructions with tags starting at `lbl1`.
///
/// An empty axis, or one with no adjacent repeats, yields `""`.
pub fn merge_instructions(axis: &Axis, offset: usize) -> String {
    merge_instructions_with(axis, offset, &mut TagCounter::new())
}

/// Positions of the first member of every run at `level`, comma-separated.
///
/// Singleton runs are included. Negative levels count from the innermost
/// level (`-1` is the last level).
///
/// # Errors
///
/// Returns [`GridError::OutOfRange`] if `level` is outside
/// `[-levels, levels)`.
pub fn first_row_of_run(axis: &Axis, level: isize, offset: usize) -> Result<String> {
    run_edges(axis, level, offset, |run| run.start)
}

/// Positions of the last member of every run at `level`, comma-separated.
///
/// See [`first_row_of_run`] for level indexing and errors.
pub fn last_row_of_run(axis: &Axis, level: isize, offset: usize) -> Result<String> {
    run_edges(axis, level, offset, |run| run.end)
}

fn run_edges(
    axis: &Axis,
    level: isize,
    offset: usize,
    edge: impl Fn(&Run) -> usize,
) -> Result<String> {
    let index = resolve_level(axis, level)?;
    let labels = axis.level(index).unwrap_or_default();
    Ok(runs(labels)
        .iter()
        .map(|run| (edge(run) + offset).to_string())
        .collect::<Vec<_>>()
        .join(","))
}

fn resolve_level(axis: &Axis, level: isize) -> Result<usize> {
    let levels = axis.level_count();
    let resolved = if level < 0 {
        levels as isize + level
    } else {
        level
    };
    if resolved < 0 || resolved >= levels as isize {
        return Err(GridError::OutOfRange { level, levels });
    }
    Ok(resolved as usize)
}

impl ReferenceTable {
    /// Merge instructions for the row axis.
    ///
    /// `offset` defaults to the number of header rows (column-label levels).
    pub fn row_merge_instructions(&self, offset: Option<usize>) -> String {
        merge_instructions(self.rows(), offset.unwrap_or(self.header_rows()))
    }

    /// Merge instructions for the column axis.
    ///
    /// `offset` defaults to the number of header columns (row-label levels).
    pub fn column_merge_instructions(&self, offset: Option<usize>) -> String {
        merge_instructions(self.columns(), offset.unwrap_or(self.header_columns()))
    }

    /// Merge ranges for both axes with tags numbered continuously, rows
    /// first, using the default offsets.
    pub fn merge_ranges(&self) -> (Vec<MergeRange>, Vec<MergeRange>) {
        let mut tags = TagCounter::new();
        let rows = merge_ranges(self.rows(), self.header_rows(), &mut tags);
        let columns = merge_ranges(self.columns(), self.header_columns(), &mut tags);
        (rows, columns)
    }
}
