//! Table sorting and row-selection rules.
//!
//! # Design
//! - Sorting is single-column: the clicked header owns the only indicator.
//! - Cell text that parses fully as a finite number compares numerically; every
//!   other value is text, and numbers always sort before text.
//! - Sorting is stable so equal keys keep their current row order.

use std::cmp::Ordering;

/// Class marking an ascending header.
pub const SORT_ASC_CLASS: &str = "sort-asc";
/// Class marking a descending header.
pub const SORT_DESC_CLASS: &str = "sort-desc";

/// Direction applied by a header click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Direction for the next click, given whether the header currently shows ascending.
    #[must_use]
    pub const fn next(currently_ascending: bool) -> Self {
        if currently_ascending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Indicator class for this direction.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Ascending => SORT_ASC_CLASS,
            Self::Descending => SORT_DESC_CLASS,
        }
    }
}

/// Comparable value extracted from a table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    /// Cell text parsed as a finite number.
    Number(f64),
    /// Any other cell text, trimmed.
    Text(String),
}

impl SortKey {
    /// Build a key from raw cell text.
    #[must_use]
    pub fn from_cell(raw: &str) -> Self {
        let text = raw.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(text.to_string()),
        }
    }

    /// Total order over keys: numbers before text.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Row positions in sorted order.
///
/// `keys[i]` is the key of the row currently at position `i`.
#[must_use]
pub fn sort_order(keys: &[SortKey], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = keys[a].compare(&keys[b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    order
}

/// Aggregate selection of the rows in a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// No row selected.
    None,
    /// Every row selected.
    All,
    /// Some but not all rows selected.
    Some,
}

impl SelectionState {
    /// Derive the aggregate from a checked count and the total row count.
    #[must_use]
    pub const fn from_counts(checked: usize, total: usize) -> Self {
        if checked == 0 {
            Self::None
        } else if checked == total {
            Self::All
        } else {
            Self::Some
        }
    }

    /// `(checked, indeterminate)` for the header checkbox.
    #[must_use]
    pub const fn header_flags(self) -> (bool, bool) {
        match self {
            Self::None => (false, false),
            Self::All => (true, false),
            Self::Some => (false, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[&str], direction: SortDirection) -> Vec<String> {
        let keys: Vec<SortKey> = values.iter().map(|v| SortKey::from_cell(v)).collect();
        sort_order(&keys, direction)
            .into_iter()
            .map(|idx| values[idx].to_string())
            .collect()
    }

    #[test]
    fn numeric_columns_sort_numerically() {
        assert_eq!(
            sorted(&["10", "2", "1"], SortDirection::Ascending),
            vec!["1", "2", "10"]
        );
    }

    #[test]
    fn second_click_sorts_descending() {
        let direction = SortDirection::next(true);
        assert_eq!(direction, SortDirection::Descending);
        assert_eq!(sorted(&["1", "2", "10"], direction), vec!["10", "2", "1"]);
    }

    #[test]
    fn first_click_defaults_to_ascending() {
        assert_eq!(SortDirection::next(false), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.class(), "sort-asc");
        assert_eq!(SortDirection::Descending.class(), "sort-desc");
    }

    #[test]
    fn numbers_sort_before_text() {
        assert_eq!(
            sorted(&["beta", "3", "alpha", "-1.5"], SortDirection::Ascending),
            vec!["-1.5", "3", "alpha", "beta"]
        );
        assert_eq!(
            sorted(&["beta", "3", "alpha"], SortDirection::Descending),
            vec!["beta", "alpha", "3"]
        );
    }

    #[test]
    fn cell_keys_are_trimmed_and_finite() {
        assert_eq!(SortKey::from_cell("  42 "), SortKey::Number(42.0));
        assert_eq!(SortKey::from_cell(""), SortKey::Text(String::new()));
        assert_eq!(SortKey::from_cell("inf"), SortKey::Text("inf".to_string()));
        assert_eq!(SortKey::from_cell("12px"), SortKey::Text("12px".to_string()));
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let keys = vec![
            SortKey::from_cell("a"),
            SortKey::from_cell("b"),
            SortKey::from_cell("a"),
        ];
        assert_eq!(sort_order(&keys, SortDirection::Ascending), vec![0, 2, 1]);
    }

    #[test]
    fn selection_tri_state_for_three_rows() {
        assert_eq!(SelectionState::from_counts(0, 3).header_flags(), (false, false));
        assert_eq!(SelectionState::from_counts(1, 3).header_flags(), (false, true));
        assert_eq!(SelectionState::from_counts(3, 3).header_flags(), (true, false));
        assert_eq!(SelectionState::from_counts(2, 3), SelectionState::Some);
    }
}
