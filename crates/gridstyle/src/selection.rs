//! Selections and axis overrides accepted by the encoder.
//!
//! A [`Selection`] names the cells to style, by label, relative to a
//! [`ReferenceTable`](crate::ReferenceTable). One-dimensional selections are
//! tagged explicitly as [`Selection::Row`] or [`Selection::Column`]; nothing
//! is inferred from the shape of the data.

use std::fmt;
use std::slice;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::reference::Label;

/// The cells a styling instruction applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// A 2-D block: explicit row and column label lists, or a sub-table
    /// sliced from the reference.
    Block {
        rows: Vec<Label>,
        columns: Vec<Label>,
    },
    /// A row-vector: one implied row, its entries are column labels.
    Row { name: Label, columns: Vec<Label> },
    /// A column-vector: one implied column, its entries are row labels.
    Column { name: Label, rows: Vec<Label> },
    /// Raw selector text, passed through without encoding.
    Literal(String),
}

impl Selection {
    /// A block selection from row and column labels.
    pub fn block<R, C>(rows: R, columns: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<Label>,
        C: IntoIterator,
        C::Item: Into<Label>,
    {
        Selection::Block {
            rows: rows.into_iter().map(Into::into).collect(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// A row-vector named `name` spanning the given column labels.
    pub fn row<C>(name: impl Into<Label>, columns: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<Label>,
    {
        Selection::Row {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// A column-vector named `name` spanning the given row labels.
    pub fn column<R>(name: impl Into<Label>, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: Into<Label>,
    {
        Selection::Column {
            name: name.into(),
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw selector text.
    pub fn literal(text: impl Into<String>) -> Self {
        Selection::Literal(text.into())
    }

    /// Returns `true` for [`Selection::Literal`].
    pub fn is_literal(&self) -> bool {
        matches!(self, Selection::Literal(_))
    }

    /// Row and column labels, or `None` for a literal.
    pub fn axes(&self) -> Option<(&[Label], &[Label])> {
        match self {
            Selection::Block { rows, columns } => Some((rows, columns)),
            Selection::Row { name, columns } => Some((slice::from_ref(name), columns)),
            Selection::Column { name, rows } => Some((rows, slice::from_ref(name))),
            Selection::Literal(_) => None,
        }
    }
}

/// Explicit positions for one axis, bypassing label resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOverride {
    /// 1-based positions, emitted comma-separated in the given order.
    Positions(Vec<usize>),
    /// A validated range string such as `"1,3:5"`, emitted verbatim.
    Literal(String),
}

impl AxisOverride {
    /// An override from 1-based positions.
    pub fn positions<I: IntoIterator<Item = usize>>(positions: I) -> Self {
        AxisOverride::Positions(positions.into_iter().collect())
    }

    /// Parses a range string.
    ///
    /// The syntax is comma-separated tokens, each a positive integer `N` or
    /// an inclusive range `N:M` with `N <= M`. Whitespace around tokens is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Configuration`] when the text does not follow
    /// the syntax.
    ///
    /// ```
    /// use gridstyle::AxisOverride;
    ///
    /// assert!(AxisOverride::parse("1,3:5").is_ok());
    /// assert!(AxisOverride::parse("0").is_err());
    /// assert!(AxisOverride::parse("4:2").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split(',').map(str::trim).collect();
        let mut normalized = Vec::with_capacity(tokens.len());
        for token in tokens {
            normalized.push(parse_token(token).map_err(|reason| {
                GridError::config(format!("invalid override syntax '{}': {}", text, reason))
            })?);
        }
        Ok(AxisOverride::Literal(normalized.join(",")))
    }

    /// Returns `true` when the override names no positions.
    pub fn is_empty(&self) -> bool {
        match self {
            AxisOverride::Positions(positions) => positions.is_empty(),
            AxisOverride::Literal(text) => text.is_empty(),
        }
    }

    pub(crate) fn render(&self) -> String {
        match self {
            AxisOverride::Positions(positions) => join_positions(positions),
            AxisOverride::Literal(text) => text.clone(),
        }
    }
}

impl FromStr for AxisOverride {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Self> {
        AxisOverride::parse(text)
    }
}

impl fmt::Display for AxisOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn parse_token(token: &str) -> std::result::Result<String, String> {
    if token.is_empty() {
        return Err("empty position".to_string());
    }
    match token.split_once(':') {
        Some((start, end)) => {
            let start = parse_position(start.trim())?;
            let end = parse_position(end.trim())?;
            if start > end {
                return Err(format!("range {}:{} is descending", start, end));
            }
            Ok(format!("{}:{}", start, end))
        }
        None => parse_position(token).map(|position| position.to_string()),
    }
}

fn parse_position(text: &str) -> std::result::Result<usize, String> {
    let position: usize = text
        .parse()
        .map_err(|_| format!("'{}' is not a position", text))?;
    if position == 0 {
        return Err("positions are 1-based".to_string());
    }
    Ok(position)
}

pub(crate) fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
