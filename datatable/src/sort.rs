//! Sort state and the stable row ordering derived from it.

use serde::{Deserialize, Serialize};

use crate::column::ColumnModel;
use crate::row::TableRow;
use crate::value::Comparator;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Whether this is ascending.
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Current sort key and direction.
///
/// With no `order_by` column the rows keep the order the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortState {
    /// Column the rows are ordered by.
    pub order_by: Option<String>,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted state.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            order_by: Some(column_id.into()),
            direction: SortDirection::Asc,
        }
    }

    /// Descending on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            order_by: Some(column_id.into()),
            direction: SortDirection::Desc,
        }
    }

    /// Whether a sort key is set.
    pub fn is_sorted(&self) -> bool {
        self.order_by.is_some()
    }

    /// Direction for a column, if it is the current sort key.
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        match &self.order_by {
            Some(id) if id == column_id => Some(self.direction),
            _ => None,
        }
    }

    /// Toggle sort for a column.
    ///
    /// A different column becomes the key in ascending order. The current
    /// key flips between ascending and descending; sorting is never cleared.
    /// Unknown or non-sortable columns leave the state untouched.
    ///
    /// Returns the new sort key and direction.
    pub fn toggle(
        &mut self,
        column_id: &str,
        columns: &ColumnModel,
    ) -> Option<(String, SortDirection)> {
        if !columns.is_sortable(column_id) {
            log::debug!("ignoring sort toggle on column '{}'", column_id);
            return None;
        }

        let direction = match self.direction_for(column_id) {
            Some(current) => current.flipped(),
            None => SortDirection::Asc,
        };
        self.order_by = Some(column_id.to_string());
        self.direction = direction;
        Some((column_id.to_string(), direction))
    }
}

/// Compute the display order of `rows` as indices into the slice.
///
/// Returns the identity permutation when unsorted or when the sort column is
/// unknown or not sortable. The ordering is stable: rows with equal keys keep
/// their relative input order.
pub fn order_indices<T: TableRow>(
    rows: &[T],
    sort: &SortState,
    columns: &ColumnModel,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();

    let Some(column_id) = sort.order_by.as_deref() else {
        return indices;
    };
    let Some(column) = columns.get(column_id).filter(|c| c.sortable) else {
        log::debug!("sort column '{}' is not sortable, keeping input order", column_id);
        return indices;
    };

    let keys: Vec<_> = rows.iter().map(|row| row.value(column_id)).collect();
    let comparator = Comparator::resolve(column.kind, keys.iter().cloned());

    let mismatched = keys.iter().filter(|k| !comparator.accepts(k)).count();
    if mismatched > 0 {
        log::warn!(
            "column '{}' has {} value(s) that are not {:?}, ordering them after matching values",
            column_id,
            mismatched,
            comparator.kind()
        );
    }

    // sort_by is stable
    indices.sort_by(|&a, &b| {
        let ord = comparator.compare(&keys[a], &keys[b]);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    log::trace!(
        "ordered {} rows by '{}' {:?}",
        rows.len(),
        column_id,
        sort.direction
    );
    indices
}

/// Produce an ordered view over `rows` without mutating or copying them.
pub fn apply<'a, T: TableRow>(
    rows: &'a [T],
    sort: &SortState,
    columns: &ColumnModel,
) -> Vec<&'a T> {
    order_indices(rows, sort, columns)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
