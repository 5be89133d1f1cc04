//! Record-to-text table rendering.
//!
//! Rendering runs in two passes. The first formats every present cell
//! exactly once (transform or value-type stringification) into a scratch
//! grid and measures natural column widths. The second negotiates widths
//! against the target and lays out the header, the separator rule and the
//! data rows from the cached cell text.
//!
//! ```rust
//! use gridstyle_render::tabular::{render, ColumnSpec, RenderOptions};
//! use gridstyle_render::Theme;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"id": "apple", "type": "fruit"}).as_object().unwrap().clone(),
//!     json!({"id": "potato", "type": "dirty-ground-vegetable"}).as_object().unwrap().clone(),
//! ];
//! let columns = vec![ColumnSpec::new("id").keep(), ColumnSpec::new("type")];
//! let options = RenderOptions::new().target_width(10).theme(Theme::plain());
//!
//! let table = render(&records, &columns, &options);
//! let lines: Vec<&str> = table.lines().collect();
//! assert_eq!(lines[2], " apple  │ fruit    ");
//! assert_eq!(lines[3], " potato │ dirty-g… ");
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::RenderError;
use crate::theme::{Palette, Theme, HEADER_STYLE, STRIPE_STYLE};

use super::resolve::{default_target_width, negotiate, ColumnMetrics};
use super::types::{Align, ColumnSpec, Overflow, RenderOptions, TableSpec};
use super::util::{
    display_width, pad_center, pad_left, pad_right, truncate_end, truncate_to_display_width, wrap,
};

/// One row of input: column key to raw value. Keys a column names but the
/// record lacks render as blank cells.
pub type Record = Map<String, Value>;

const RESET: &str = "\x1b[0m";

/// Converts typed rows into records via `serde`.
///
/// # Errors
///
/// [`RenderError::Json`] if a row fails to serialize and
/// [`RenderError::Record`] if it serializes to something other than a map.
///
/// ```rust
/// use gridstyle_render::tabular::records_from;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Job { id: u32, state: &'static str }
///
/// let records = records_from(&[Job { id: 7, state: "queued" }]).unwrap();
/// assert_eq!(records[0]["state"], "queued");
/// ```
pub fn records_from<T: Serialize>(items: &[T]) -> Result<Vec<Record>, RenderError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match serde_json::to_value(item)? {
            Value::Object(map) => Ok(map),
            other => Err(RenderError::Record(format!(
                "row {} is not a map: {}",
                index + 1,
                other
            ))),
        })
        .collect()
}

/// Renders records as a text table.
///
/// Output is the header row, a separator rule, then the data rows, joined
/// with `\n` and without a trailing newline. An empty column list renders
/// as the empty string.
pub fn render(records: &[Record], columns: &[ColumnSpec], options: &RenderOptions) -> String {
    if columns.is_empty() {
        return String::new();
    }
    let theme = &options.theme;
    let palette = theme.palette();

    let cells = format_cells(records, columns, palette);

    let border_width = display_width(theme.border_glyph());
    let metrics: Vec<ColumnMetrics> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let header = display_width(column.header_label());
            let natural = cells
                .iter()
                .map(|row| cell_width(&row[index]))
                .fold(header, usize::max);
            ColumnMetrics {
                natural,
                header,
                chrome: chrome(columns, index, border_width),
                overflow: column.overflow,
            }
        })
        .collect();

    let target = options.target_width.unwrap_or_else(default_target_width);
    let widths = negotiate(&metrics, target, display_width(theme.ellipsis_glyph()));
    debug!(
        rows = records.len(),
        columns = columns.len(),
        target,
        widths = ?widths,
        "rendering table"
    );

    let layout = Layout {
        columns,
        widths: &widths,
        theme,
    };

    let mut lines = Vec::with_capacity(records.len() + 2);
    let labels: Vec<&str> = columns.iter().map(ColumnSpec::header_label).collect();
    lines.extend(layout.row(
        &labels,
        |text| paint(palette, HEADER_STYLE, text),
        str::to_string,
    ));

    let rule_width = display_width(theme.rule_glyph());
    if rule_width > 0 {
        let row_width: usize = metrics
            .iter()
            .zip(&widths)
            .map(|(m, width)| width + m.chrome)
            .sum();
        lines.push(theme.rule_glyph().repeat(row_width / rule_width));
    }

    for (index, row) in cells.iter().enumerate() {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        if options.striped && index % 2 == 1 {
            lines.extend(layout.row(&row, str::to_string, |segment| {
                paint(palette, STRIPE_STYLE, segment)
            }));
        } else {
            lines.extend(layout.row(&row, str::to_string, str::to_string));
        }
    }

    lines.join("\n")
}

/// Pass 1: cell text for every record and column, formatted once.
fn format_cells(records: &[Record], columns: &[ColumnSpec], palette: &Palette) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            columns
                .iter()
                .map(|column| match record.get(&column.key) {
                    Some(value) => column.format(value, palette),
                    None => {
                        trace!(row, key = %column.key, "record has no value for column");
                        String::new()
                    }
                })
                .collect()
        })
        .collect()
}

fn cell_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

/// Padding plus the border following column `index`.
fn chrome(columns: &[ColumnSpec], index: usize, border_width: usize) -> usize {
    let column = &columns[index];
    let padding = if column.no_padding { 0 } else { 2 };
    padding + if has_border(columns, index) { border_width } else { 0 }
}

fn has_border(columns: &[ColumnSpec], index: usize) -> bool {
    index + 1 < columns.len() && !columns[index].no_border
}

fn paint(palette: &Palette, style: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    palette.paint(style, text)
}

/// Cuts a wrapped piece that still overflows, such as a wide character in
/// a one-column cell.
fn clamp(piece: String, width: usize) -> String {
    if display_width(&piece) <= width {
        return piece;
    }
    let mut cut = truncate_to_display_width(&piece, width);
    if cut.contains('\x1b') {
        cut.push_str(RESET);
    }
    cut
}

/// Pass 2: places fitted cell text into negotiated column widths.
struct Layout<'a> {
    columns: &'a [ColumnSpec],
    widths: &'a [usize],
    theme: &'a Theme,
}

impl Layout<'_> {
    /// Lays out one logical row, which may span several lines when cells
    /// contain newlines or wrap.
    ///
    /// `style` paints the fitted text of each cell. `segment` paints each
    /// padded cell and border on its own, so a reset inside one cell never
    /// ends the styling of the cells after it.
    fn row(
        &self,
        cells: &[&str],
        style: impl Fn(&str) -> String,
        segment: impl Fn(&str) -> String,
    ) -> Vec<String> {
        let fitted: Vec<Vec<String>> = self
            .columns
            .iter()
            .zip(self.widths)
            .zip(cells)
            .map(|((column, &width), text)| self.fit(text, width, column.overflow))
            .collect();
        let height = fitted.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|line| {
                let mut out = String::new();
                for (index, column) in self.columns.iter().enumerate() {
                    let text = fitted[index].get(line).map(String::as_str).unwrap_or("");
                    let cell = align(&style(text), self.widths[index], column.effective_align());
                    if column.no_padding {
                        out.push_str(&segment(&cell));
                    } else {
                        out.push_str(&segment(&format!(" {} ", cell)));
                    }
                    if has_border(self.columns, index) {
                        out.push_str(&segment(self.theme.border_glyph()));
                    }
                }
                out
            })
            .collect()
    }

    /// Fits cell text into `width` columns. Only `Keep` cells may come out
    /// wider.
    fn fit(&self, text: &str, width: usize, overflow: Overflow) -> Vec<String> {
        let ellipsis = self.theme.ellipsis_glyph();
        text.split('\n')
            .flat_map(|line| {
                if display_width(line) <= width {
                    return vec![line.to_string()];
                }
                match overflow {
                    Overflow::Keep => vec![line.to_string()],
                    Overflow::Truncate => {
                        let mut cut = truncate_end(line, width, ellipsis);
                        if cut.contains('\x1b') {
                            cut.push_str(RESET);
                        }
                        vec![cut]
                    }
                    Overflow::Shrink => wrap(line, width)
                        .into_iter()
                        .map(|piece| clamp(piece, width))
                        .collect(),
                }
            })
            .collect()
    }
}

fn align(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(text, width),
        Align::Right => pad_left(text, width),
        Align::Center => pad_center(text, width),
    }
}

/// A column list bundled with render options.
///
/// ```rust
/// use gridstyle_render::tabular::{ColumnSpec, Table};
/// use gridstyle_render::Theme;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Mail { from: String, unread: bool }
///
/// let table = Table::new(vec![
///     ColumnSpec::new("from").header("From"),
///     ColumnSpec::new("unread").flag(),
/// ])
/// .target_width(40)
/// .theme(Theme::plain());
///
/// let out = table
///     .render_rows(&[Mail { from: "ada".into(), unread: true }])
///     .unwrap();
/// assert!(out.contains("✓"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    options: RenderOptions,
}

impl Table {
    /// A table with default options.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Table {
            columns,
            options: RenderOptions::default(),
        }
    }

    /// A table from a loaded spec and a theme.
    pub fn from_spec(spec: &TableSpec, theme: Theme) -> Self {
        Table {
            columns: spec.columns.clone(),
            options: spec.options(theme),
        }
    }

    /// Enable or disable striping.
    pub fn striped(mut self, striped: bool) -> Self {
        self.options.striped = striped;
        self
    }

    /// Fix the target width.
    pub fn target_width(mut self, width: usize) -> Self {
        self.options.target_width = Some(width);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    /// The column specs.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders records. See [`render`].
    pub fn render(&self, records: &[Record]) -> String {
        render(records, &self.columns, &self.options)
    }

    /// Converts typed rows with [`records_from`] and renders them.
    pub fn render_rows<T: Serialize>(&self, items: &[T]) -> Result<String, RenderError> {
        Ok(self.render(&records_from(items)?))
    }
}
