//! Width negotiation for table columns.
//!
//! Every column starts at its natural width: the widest of its header label
//! and its cells. When the full row (cells plus padding and borders) does
//! not fit the target width, flexible columns give up space:
//!
//! 1. `Keep` columns never change and are left out of the budget: the
//!    flexible columns alone are fitted to the target, so `Keep` width
//!    adds on top of it and the row can exceed the target. A truncate
//!    column beside a wide `Keep` column only gives up space when it
//!    overflows the target by itself.
//! 2. `Shrink` columns are narrowed first, in proportion to their slack
//!    (natural width minus header width, never below one column). Their
//!    content wraps.
//! 3. `Truncate` columns absorb whatever overflow remains, in proportion to
//!    their slack down to a floor of the ellipsis width plus one.

use tracing::debug;

use super::types::Overflow;

/// What negotiation needs to know about one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColumnMetrics {
    pub natural: usize,
    pub header: usize,
    /// Padding plus trailing border.
    pub chrome: usize,
    pub overflow: Overflow,
}

/// Fits columns into `target` display columns, returning the content
/// width of each column (padding and borders excluded).
pub(crate) fn negotiate(
    columns: &[ColumnMetrics],
    target: usize,
    ellipsis_width: usize,
) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.natural).collect();
    let row_width: usize = columns.iter().map(|c| c.natural + c.chrome).sum();
    if row_width <= target {
        return widths;
    }

    let flexible: usize = columns
        .iter()
        .filter(|c| c.overflow != Overflow::Keep)
        .map(|c| c.natural + c.chrome)
        .sum();
    let mut overflow = flexible.saturating_sub(target);

    overflow -= narrow(columns, &mut widths, overflow, Overflow::Shrink, |c| {
        c.header.max(1).min(c.natural)
    });
    let floor = ellipsis_width + 1;
    overflow -= narrow(columns, &mut widths, overflow, Overflow::Truncate, |c| {
        floor.min(c.natural)
    });

    debug!(
        target,
        natural = row_width,
        resolved = widths.iter().zip(columns).map(|(w, c)| w + c.chrome).sum::<usize>(),
        unresolved = overflow,
        "negotiated column widths"
    );
    widths
}

/// Narrows the columns with `policy` by up to `overflow` in total, never
/// below `floor`. Returns how much was reclaimed.
fn narrow(
    columns: &[ColumnMetrics],
    widths: &mut [usize],
    overflow: usize,
    policy: Overflow,
    floor: impl Fn(&ColumnMetrics) -> usize,
) -> usize {
    let candidates: Vec<usize> = (0..columns.len())
        .filter(|&i| columns[i].overflow == policy)
        .collect();
    let slack: Vec<usize> = candidates
        .iter()
        .map(|&i| widths[i].saturating_sub(floor(&columns[i])))
        .collect();
    let reclaim = overflow.min(slack.iter().sum());
    for (&i, cut) in candidates.iter().zip(distribute(reclaim, &slack)) {
        widths[i] -= cut;
    }
    reclaim
}

/// Splits `amount` across slots in proportion to `capacities`, never giving
/// a slot more than its capacity. Rounding leftovers go left to right.
///
/// `amount` must not exceed the total capacity.
fn distribute(amount: usize, capacities: &[usize]) -> Vec<usize> {
    let total: usize = capacities.iter().sum();
    if total == 0 || amount == 0 {
        return vec![0; capacities.len()];
    }

    let mut shares: Vec<usize> = capacities.iter().map(|c| amount * c / total).collect();
    let mut leftover = amount - shares.iter().sum::<usize>();
    while leftover > 0 {
        let before = leftover;
        for (share, capacity) in shares.iter_mut().zip(capacities) {
            if leftover > 0 && *share < *capacity {
                *share += 1;
                leftover -= 1;
            }
        }
        if leftover == before {
            break;
        }
    }
    shares
}

/// Width to fit tables into when none is given: the terminal width minus
/// two, capped at 80. Falls back to 80 when no terminal is attached.
pub fn default_target_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| (w.0 as usize).saturating_sub(2).min(80))
        .unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(natural: usize, header: usize, overflow: Overflow) -> ColumnMetrics {
        ColumnMetrics {
            natural,
            header,
            chrome: 3,
            overflow,
        }
    }

    #[test]
    fn fits_without_negotiation() {
        let columns = [
            metrics(5, 2, Overflow::Truncate),
            metrics(5, 2, Overflow::Shrink),
        ];
        assert_eq!(negotiate(&columns, 16, 1), vec![5, 5]);
    }

    #[test]
    fn keep_columns_are_never_narrowed() {
        let columns = [metrics(30, 2, Overflow::Keep), metrics(4, 2, Overflow::Keep)];
        assert_eq!(negotiate(&columns, 10, 1), vec![30, 4]);
    }

    #[test]
    fn keep_columns_sit_outside_the_budget() {
        // flexible: 22 + 2 = 24 against a target of 10
        let columns = [
            ColumnMetrics {
                natural: 6,
                header: 2,
                chrome: 3,
                overflow: Overflow::Keep,
            },
            ColumnMetrics {
                natural: 22,
                header: 4,
                chrome: 2,
                overflow: Overflow::Truncate,
            },
        ];
        assert_eq!(negotiate(&columns, 10, 1), vec![6, 8]);
    }

    #[test]
    fn keep_width_does_not_count_toward_truncate_budget() {
        let columns = [
            metrics(40, 2, Overflow::Keep),
            ColumnMetrics {
                natural: 60,
                header: 4,
                chrome: 2,
                overflow: Overflow::Truncate,
            },
        ];
        // row 105 against 80, but the truncate column alone needs 62
        assert_eq!(negotiate(&columns, 80, 1), vec![40, 60]);
    }

    #[test]
    fn empty_header_shrink_keeps_one_column() {
        let columns = [metrics(1, 0, Overflow::Shrink), metrics(26, 1, Overflow::Shrink)];
        assert_eq!(negotiate(&columns, 3, 1), vec![1, 1]);
    }

    #[test]
    fn shrink_goes_before_truncate() {
        let columns = [
            metrics(20, 4, Overflow::Shrink),
            metrics(20, 4, Overflow::Truncate),
        ];
        // row 46, overflow 6, all taken from the shrink column
        assert_eq!(negotiate(&columns, 40, 1), vec![14, 20]);
    }

    #[test]
    fn truncate_absorbs_what_shrink_cannot() {
        let columns = [
            metrics(10, 8, Overflow::Shrink),
            metrics(20, 4, Overflow::Truncate),
        ];
        // row 36, overflow 16: shrink gives 2, truncate gives 14
        assert_eq!(negotiate(&columns, 20, 1), vec![8, 6]);
    }

    #[test]
    fn shrink_is_proportional_to_slack() {
        let columns = [
            metrics(12, 2, Overflow::Shrink),
            metrics(22, 2, Overflow::Shrink),
        ];
        // row 40, overflow 15, slack 10 and 20
        assert_eq!(negotiate(&columns, 25, 1), vec![7, 12]);
    }

    #[test]
    fn floors_hold_when_target_is_unreachable() {
        let columns = [
            metrics(10, 3, Overflow::Shrink),
            metrics(10, 3, Overflow::Truncate),
        ];
        assert_eq!(negotiate(&columns, 1, 1), vec![3, 2]);
    }

    #[test]
    fn narrow_columns_below_floor_stay_put() {
        let columns = [metrics(1, 1, Overflow::Truncate), metrics(30, 1, Overflow::Truncate)];
        let widths = negotiate(&columns, 10, 1);
        assert_eq!(widths[0], 1);
        assert_eq!(widths[1], 3);
    }

    #[test]
    fn distribute_proportionally() {
        assert_eq!(distribute(6, &[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(distribute(3, &[10, 20]), vec![1, 2]);
        assert_eq!(distribute(0, &[5, 5]), vec![0, 0]);
        assert_eq!(distribute(5, &[0, 0]), vec![0, 0]);
    }

    #[test]
    fn distribute_hands_leftovers_left_to_right() {
        assert_eq!(distribute(2, &[1, 1, 1]), vec![1, 1, 0]);
        assert_eq!(distribute(4, &[1, 5]), vec![1, 3]);
    }

    #[test]
    fn default_target_width_is_capped() {
        let width = default_target_width();
        assert!(width <= 80);
    }
}
