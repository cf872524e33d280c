use std::cmp::Ordering;

use super::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// There is never a direction without a field or a field without a direction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        key: String,
        direction: SortDirection,
    },
}

impl SortState {
    /// The state after the header for `key` is activated.
    ///
    /// A different column always starts ascending, the same column goes
    /// ascending -> descending -> unsorted
    #[must_use]
    pub fn activate(&self, key: &str) -> Self {
        match self {
            SortState::Sorted {
                key: current,
                direction: SortDirection::Ascending,
            } if current == key => SortState::Sorted {
                key: key.to_string(),
                direction: SortDirection::Descending,
            },
            SortState::Sorted {
                key: current,
                direction: SortDirection::Descending,
            } if current == key => SortState::Unsorted,
            _ => SortState::Sorted {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn direction_for(&self, column_key: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted { key, direction } if key == column_key => Some(*direction),
            _ => None,
        }
    }

}

/// Three-way comparison of two raw values. Missing values (and NaN) go
/// after defined ones regardless of direction
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_unordered(), b.is_unordered()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.natural_cmp(b)),
    }
}
