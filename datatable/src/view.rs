//! Read-only snapshot handed to renderers.

use crate::column::Column;
use crate::pagination::PageInfo;
use crate::selection::SelectionStatus;
use crate::sort::{SortDirection, SortState};

/// A visible row and whether it is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow<T> {
    pub row: T,
    pub selected: bool,
}

/// Everything a renderer needs to paint one frame of a table.
#[derive(Debug, Clone)]
pub struct TableView<T> {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Rows on the current page, in display order.
    pub rows: Vec<ViewRow<T>>,
    /// Header checkbox state.
    pub header: SelectionStatus,
    /// Page metadata, `None` when pagination is disabled.
    pub page: Option<PageInfo>,
    /// Page sizes offered to the user.
    pub rows_per_page_options: Vec<usize>,
    /// Current sort.
    pub sort: SortState,
    /// Whether selection checkboxes are shown.
    pub selectable: bool,
    /// Whether header clicks sort.
    pub sortable: bool,
}

impl<T> TableView<T> {
    /// Sort indicator for a column header, if it is the sort key.
    pub fn sort_indicator(&self, column_id: &str) -> Option<SortDirection> {
        if !self.sortable {
            return None;
        }
        self.sort.direction_for(column_id)
    }

    /// Whether the header for a column should react to clicks.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.sortable && self.columns.iter().any(|c| c.id == column_id && c.sortable)
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the current page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
