//! Column width allocation.
//!
//! ```text
//! overhead  = 3n + 2
//! available = max(terminal_width - overhead, 40)
//! budget    = available - Σ min_width            (clamped at 0)
//! ```
//!
//! Every column starts at its minimum. Columns are then raised toward their
//! ideal width in order until the budget runs out; the column that exhausts
//! it takes whatever is left and expansion stops. Any remainder goes to the
//! flexible column if one is selected.
//!
//! Minimums are never violated, so when they alone exceed the floor of 40
//! the result is wider than the terminal.

use serde::Serialize;
use tracing::debug;

use crate::columns::{ColumnDefinition, ColumnKind};

/// Usable width never drops below this, however narrow the terminal.
pub const MIN_AVAILABLE_WIDTH: usize = 40;

/// Decoration cost of `n` columns.
pub fn overhead(columns: usize) -> usize {
    3 * columns + 2
}

/// Resolved widths, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnWidths {
    entries: Vec<(ColumnKind, usize)>,
}

impl ColumnWidths {
    /// First width allocated to `kind`. A column selected twice has one
    /// entry per position; use [`ColumnWidths::at`] to tell them apart.
    pub fn get(&self, kind: ColumnKind) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, w)| *w)
    }

    /// Column and width at `index` in selection order.
    pub fn at(&self, index: usize) -> Option<(ColumnKind, usize)> {
        self.entries.get(index).copied()
    }

    /// Sum of all widths, without decorations.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnKind, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Drops every entry for `kind`.
    pub fn without(mut self, kind: ColumnKind) -> Self {
        self.entries.retain(|(k, _)| *k != kind);
        self
    }
}

impl FromIterator<(ColumnKind, usize)> for ColumnWidths {
    fn from_iter<I: IntoIterator<Item = (ColumnKind, usize)>>(iter: I) -> Self {
        ColumnWidths {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Computes a width for every column given the terminal width.
///
/// ```
/// use tiny_jira::columns::{parse_columns, ColumnKind};
/// use tiny_jira::layout::allocate;
///
/// let cols = parse_columns(Some("key,summary")).unwrap().columns();
/// let widths = allocate(&cols, 60);
/// assert_eq!(widths.get(ColumnKind::Key), Some(12));
/// assert_eq!(widths.get(ColumnKind::Summary), Some(40));
/// ```
pub fn allocate(columns: &[&ColumnDefinition], terminal_width: usize) -> ColumnWidths {
    let overhead = overhead(columns.len());
    let available = terminal_width
        .saturating_sub(overhead)
        .max(MIN_AVAILABLE_WIDTH);

    let mut widths: Vec<usize> = columns.iter().map(|c| c.min_width).collect();
    let min_total: usize = widths.iter().sum();
    let mut budget = available.saturating_sub(min_total);

    for (col, width) in columns.iter().zip(widths.iter_mut()) {
        if budget == 0 {
            break;
        }
        let Some(ideal) = col.ideal_width else {
            continue;
        };
        if ideal <= *width {
            continue;
        }
        let wanted = ideal - *width;
        if wanted <= budget {
            *width = ideal;
            budget -= wanted;
        } else {
            *width += budget;
            budget = 0;
            break;
        }
    }

    if budget > 0 {
        if let Some(pos) = columns.iter().position(|c| c.is_flexible()) {
            widths[pos] += budget;
            budget = 0;
        }
    }

    debug!(
        terminal_width,
        available,
        min_total,
        unused = budget,
        "allocated column widths"
    );

    columns
        .iter()
        .zip(widths)
        .map(|(col, width)| (col.kind, width))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::columns::CATALOGUE;
    use proptest::prelude::*;

    fn selection() -> impl Strategy<Value = Vec<&'static ColumnDefinition>> {
        prop::sample::subsequence((0..CATALOGUE.len()).collect::<Vec<_>>(), 0..=CATALOGUE.len())
            .prop_shuffle()
            .prop_map(|idx| idx.into_iter().map(|i| &CATALOGUE[i]).collect())
    }

    proptest! {
        #[test]
        fn widths_never_below_minimum(cols in selection(), width in 0usize..300) {
            let widths = allocate(&cols, width);
            prop_assert_eq!(widths.len(), cols.len());
            for (col, (kind, w)) in cols.iter().zip(widths.iter()) {
                prop_assert_eq!(col.kind, kind);
                prop_assert!(w >= col.min_width);
            }
        }

        #[test]
        fn widths_fit_when_minimums_fit(cols in selection(), width in 0usize..300) {
            let n = cols.len();
            let min_total: usize = cols.iter().map(|c| c.min_width).sum();
            let effective = width.saturating_sub(overhead(n)).max(MIN_AVAILABLE_WIDTH);
            prop_assume!(min_total <= effective);

            let widths = allocate(&cols, width);
            prop_assert!(
                widths.total() + overhead(n) <= width.max(MIN_AVAILABLE_WIDTH + overhead(n))
            );
        }

        #[test]
        fn summary_absorbs_leftover(cols in selection(), width in 0usize..300) {
            prop_assume!(cols.iter().any(|c| c.is_flexible()));
            let n = cols.len();
            let available = width.saturating_sub(overhead(n)).max(MIN_AVAILABLE_WIDTH);
            let ideal_total: usize = cols
                .iter()
                .map(|c| c.ideal_width.unwrap_or(c.min_width))
                .sum();
            prop_assume!(ideal_total <= available);

            let widths = allocate(&cols, width);
            let others: usize = cols
                .iter()
                .filter(|c| !c.is_flexible())
                .map(|c| c.ideal_width.unwrap_or(c.min_width))
                .sum();
            prop_assert_eq!(widths.get(ColumnKind::Summary), Some(available - others));
            prop_assert_eq!(widths.total(), available);
        }

        #[test]
        fn allocation_is_deterministic(cols in selection(), width in 0usize..300) {
            prop_assert_eq!(allocate(&cols, width), allocate(&cols, width));
        }
    }
}
