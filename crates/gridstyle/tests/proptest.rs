//! Property-based tests for encoding and merge generation using proptest.

use std::collections::HashSet;

use gridstyle::{
    first_row_of_run, last_row_of_run, merge_instructions, Axis, EncodeOptions, Label,
    ReferenceTable, Selection,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

/// Flat labels drawn from a tiny alphabet so duplicates are common.
fn labels_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]", 0..max)
}

/// Labels with no two equal neighbours.
fn alternating_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(0u8..3, 0..30).prop_map(|steps| {
        let mut current = 0u8;
        steps
            .into_iter()
            .map(|step| {
                current = (current + step % 2 + 1) % 3;
                format!("l{}", current)
            })
            .collect()
    })
}

fn positions(text: &str) -> Vec<usize> {
    text.split(',').map(|p| p.parse().unwrap()).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Encoding the whole table yields 1..=len on both axes, in order.
    #[test]
    fn full_table_is_gapless(
        rows in prop::collection::vec("[a-z]{1,3}", 1..40),
        columns in prop::collection::vec("[a-z]{1,3}", 1..12),
    ) {
        let table = ReferenceTable::new(Axis::flat(rows.clone()), Axis::flat(columns.clone()));
        let selector = table.encode(&table.all(), "x", &EncodeOptions::new()).unwrap();

        let parts: Vec<&str> = selector.as_str().split(' ').collect();
        prop_assert_eq!(positions(parts[0]), (1..=rows.len()).collect::<Vec<_>>());
        prop_assert_eq!(positions(parts[1]), (1..=columns.len()).collect::<Vec<_>>());
    }

    /// Duplicate labels never map two selections onto the same position.
    #[test]
    fn duplicate_labels_map_injectively(
        reference in labels_strategy(40).prop_filter("non-empty", |l| !l.is_empty()),
        picks in labels_strategy(40).prop_filter("non-empty", |l| !l.is_empty()),
    ) {
        let table = ReferenceTable::new(Axis::flat(reference.clone()), Axis::flat(["c"]));
        let selection = Selection::block(picks.clone(), ["c"]);
        let selector = table.encode(&selection, "", &EncodeOptions::new()).unwrap();

        if selector.is_empty() {
            // Only possible when no pick exists in the reference.
            let known: HashSet<&String> = reference.iter().collect();
            prop_assert!(picks.iter().all(|p| !known.contains(p)));
        } else {
            let rows = positions(selector.as_str().split(' ').next().unwrap());
            let unique: HashSet<usize> = rows.iter().copied().collect();
            prop_assert_eq!(unique.len(), rows.len());
            for position in rows {
                prop_assert!(picks.contains(&reference[position - 1]));
            }
        }
    }

    /// Encoding is deterministic.
    #[test]
    fn encoding_is_deterministic(
        reference in labels_strategy(30).prop_filter("non-empty", |l| !l.is_empty()),
        picks in labels_strategy(30).prop_filter("non-empty", |l| !l.is_empty()),
        offset in -3i64..3,
    ) {
        let table = ReferenceTable::new(Axis::flat(reference), Axis::flat(["c"]));
        let selection = Selection::block(picks, [Label::from("c")]);
        let options = EncodeOptions::new().row_offset(offset);
        prop_assert_eq!(
            table.encode(&selection, "bg red", &options).unwrap(),
            table.encode(&selection, "bg red", &options).unwrap()
        );
    }

    /// Levels without adjacent repeats produce no merge instructions.
    #[test]
    fn no_repeats_no_merges(labels in alternating_strategy(), offset in 0usize..4) {
        let axis = Axis::flat(labels);
        prop_assert_eq!(merge_instructions(&axis, offset), "");
    }

    /// Every merge line spans at least two positions.
    #[test]
    fn merges_span_two_or_more(labels in labels_strategy(40), offset in 0usize..4) {
        let axis = Axis::flat(labels);
        let instructions = merge_instructions(&axis, offset);
        for line in instructions.lines() {
            let range = line.split(' ').next().unwrap();
            let (start, end) = range.split_once(':').unwrap();
            let start: usize = start.parse().unwrap();
            let end: usize = end.parse().unwrap();
            prop_assert!(end > start);
            prop_assert!(start >= offset);
        }
    }

    /// First and last members pair up run by run.
    #[test]
    fn run_edges_pair_up(
        labels in labels_strategy(40).prop_filter("non-empty", |l| !l.is_empty()),
    ) {
        let axis = Axis::flat(labels);
        let firsts = positions(&first_row_of_run(&axis, 0, 1).unwrap());
        let lasts = positions(&last_row_of_run(&axis, -1, 1).unwrap());
        prop_assert_eq!(firsts.len(), lasts.len());
        prop_assert_eq!(firsts[0], 1);
        prop_assert_eq!(*lasts.last().unwrap(), axis.len());
        for (first, last) in firsts.iter().zip(&lasts) {
            prop_assert!(first <= last);
        }
        for pair in lasts.iter().zip(firsts.iter().skip(1)) {
            prop_assert_eq!(pair.0 + 1, *pair.1);
        }
    }
}
