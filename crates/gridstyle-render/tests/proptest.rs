//! Property-based tests for layout invariants using proptest.

use gridstyle_render::tabular::display_width;
use gridstyle_render::{render, ColumnSpec, Overflow, Record, RenderOptions, Theme};
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Test helpers
// ============================================================================

const KEYS: [&str; 3] = ["alpha", "beta", "gamma"];

/// Cell text mixing ASCII words and double-width characters.
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,12}( [a-z]{1,8}){0,4}",
        "[日本語テスト]{0,6}",
        "[a-z]{1,4}[東京]{1,3}[a-z]{0,4}",
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        prop::collection::vec(prop::option::of(cell_strategy()), KEYS.len()),
        0..6,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|cells| {
                KEYS.iter()
                    .zip(cells)
                    .filter_map(|(key, cell)| Some((key.to_string(), Value::String(cell?))))
                    .collect()
            })
            .collect()
    })
}

fn flexible_columns_strategy() -> impl Strategy<Value = Vec<ColumnSpec>> {
    prop::collection::vec(
        prop_oneof![Just(Overflow::Truncate), Just(Overflow::Shrink)],
        KEYS.len(),
    )
    .prop_map(|policies| {
        KEYS.iter()
            .zip(policies)
            .map(|(key, policy)| ColumnSpec::new(*key).overflow(policy))
            .collect()
    })
}

fn options(width: usize) -> RenderOptions {
    RenderOptions::new()
        .target_width(width)
        .theme(Theme::plain())
}

/// Narrowest row negotiation can reach: shrink columns stop at the header,
/// truncate columns at two cells (one-wide ellipsis plus one).
fn floor_row_width(columns: &[ColumnSpec]) -> usize {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let floor = match column.overflow {
                Overflow::Shrink => display_width(column.header_label()),
                _ => 2,
            };
            let border = if index + 1 < columns.len() { 1 } else { 0 };
            floor + 2 + border
        })
        .sum()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every line of a table has the same display width: no fitted cell
    /// spills past its negotiated column width.
    #[test]
    fn lines_share_one_width(
        records in records_strategy(),
        columns in flexible_columns_strategy(),
        width in 1usize..60,
    ) {
        let table = render(&records, &columns, &options(width));
        let widths: Vec<usize> = table.lines().map(display_width).collect();
        prop_assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{:?}\n{}", widths, table);
    }

    /// When the floors fit, the table fits.
    #[test]
    fn table_fits_reachable_targets(
        records in records_strategy(),
        columns in flexible_columns_strategy(),
        width in 1usize..60,
    ) {
        prop_assume!(floor_row_width(&columns) <= width);
        let table = render(&records, &columns, &options(width));
        for line in table.lines() {
            prop_assert!(display_width(line) <= width, "{:?} wider than {}", line, width);
        }
    }

    /// A table that already fits is not touched by negotiation.
    #[test]
    fn fitting_tables_ignore_the_target(
        records in records_strategy(),
        columns in flexible_columns_strategy(),
    ) {
        let wide = render(&records, &columns, &options(10_000));
        let natural = wide.lines().map(display_width).max().unwrap_or(0);
        let exact = render(&records, &columns, &options(natural));
        prop_assert_eq!(wide, exact);
    }

    /// Rendering twice gives the same text.
    #[test]
    fn render_is_idempotent(
        records in records_strategy(),
        columns in flexible_columns_strategy(),
        width in 1usize..60,
    ) {
        let options = options(width).striped(true);
        prop_assert_eq!(
            render(&records, &columns, &options),
            render(&records, &columns, &options)
        );
    }
}
