//! Callbacks emitted to the host.

use std::fmt;
use std::sync::Arc;

use crate::sort::SortDirection;

type RowClickHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;
type RowSelectHandler<T> = Arc<dyn Fn(&[T]) + Send + Sync>;
type SortHandler = Arc<dyn Fn(&str, SortDirection) + Send + Sync>;

/// Host callbacks. All are invoked synchronously.
///
/// # Example
///
/// ```
/// use datatable::TableEvents;
///
/// #[derive(Clone)]
/// struct Job(u32);
///
/// let events = TableEvents::<Job>::new()
///     .on_row_click(|job| println!("open job {}", job.0))
///     .on_row_select(|jobs| println!("{} selected", jobs.len()))
///     .on_sort(|column, direction| println!("sorted by {column} {direction:?}"));
/// ```
pub struct TableEvents<T> {
    row_click: Option<RowClickHandler<T>>,
    row_select: Option<RowSelectHandler<T>>,
    sort: Option<SortHandler>,
}

impl<T> Default for TableEvents<T> {
    fn default() -> Self {
        Self {
            row_click: None,
            row_select: None,
            sort: None,
        }
    }
}

impl<T> Clone for TableEvents<T> {
    fn clone(&self) -> Self {
        Self {
            row_click: self.row_click.clone(),
            row_select: self.row_select.clone(),
            sort: self.sort.clone(),
        }
    }
}

impl<T> fmt::Debug for TableEvents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEvents")
            .field("on_row_click", &self.row_click.is_some())
            .field("on_row_select", &self.row_select.is_some())
            .field("on_sort", &self.sort.is_some())
            .finish()
    }
}

impl<T> TableEvents<T> {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the row that was clicked.
    pub fn on_row_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.row_click = Some(Arc::new(f));
        self
    }

    /// Called with the selected rows after every selection change.
    pub fn on_row_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.row_select = Some(Arc::new(f));
        self
    }

    /// Called with the sort key and direction after a sort toggle.
    pub fn on_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, SortDirection) + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(f));
        self
    }

    pub(crate) fn emit_row_click(&self, row: &T) {
        if let Some(handler) = &self.row_click {
            handler(row);
        }
    }

    pub(crate) fn emit_row_select(&self, rows: &[T]) {
        if let Some(handler) = &self.row_select {
            handler(rows);
        }
    }

    pub(crate) fn emit_sort(&self, column_id: &str, direction: SortDirection) {
        if let Some(handler) = &self.sort {
            handler(column_id, direction);
        }
    }
}
