//! DataTable state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::action::{ActionDispatcher, RowAction};
use crate::column::{Column, ColumnModel};
use crate::config::TableConfig;
use crate::events::TableEvents;
use crate::pagination::{PageInfo, Pagination};
use crate::row::TableRow;
use crate::selection::{Selection, SelectionStatus};
use crate::sort::{self, SortDirection, SortState};
use crate::view::{TableView, ViewRow};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Internal state for the DataTable.
#[derive(Debug)]
struct TableInner<T: TableRow> {
    /// Column definitions.
    columns: ColumnModel,
    /// The full row set, in caller order.
    rows: Vec<T>,
    /// Current sort.
    sort: SortState,
    /// Cached display order (indices into `rows`), rebuilt lazily.
    order: Option<Vec<usize>>,
    /// Selected row keys.
    selection: Selection<T::Key>,
    /// Page window.
    pagination: Pagination,
    sortable: bool,
    selectable: bool,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column>, rows: Vec<T>, config: &TableConfig) -> Self {
        let columns = ColumnModel::new(columns);

        let sort = match config.initial_sort.order_by.as_deref() {
            Some(id) if !columns.is_sortable(id) => {
                log::debug!("dropping initial sort on unsortable column '{}'", id);
                SortState::none()
            }
            _ => config.initial_sort.clone(),
        };

        Self {
            columns,
            rows,
            sort,
            order: None,
            selection: Selection::new(),
            pagination: config.pagination(),
            sortable: config.sortable,
            selectable: config.selectable,
        }
    }

    fn ensure_order(&mut self) {
        if self.order.is_none() {
            self.order = Some(sort::order_indices(&self.rows, &self.sort, &self.columns));
        }
    }

    fn ordered(&mut self) -> Vec<T> {
        self.ensure_order();
        let order = self.order.as_deref().unwrap_or_default();
        order.iter().map(|&i| self.rows[i].clone()).collect()
    }

    fn visible(&mut self) -> Vec<T> {
        let total = self.rows.len();
        let window = self.pagination.window(total);
        self.ensure_order();
        let order = self.order.as_deref().unwrap_or_default();
        order[window].iter().map(|&i| self.rows[i].clone()).collect()
    }

    fn selected_rows(&self) -> Vec<T> {
        self.selection
            .selected_rows(&self.rows)
            .into_iter()
            .cloned()
            .collect()
    }

    fn find(&self, key: &T::Key) -> Option<&T> {
        self.rows.iter().find(|row| &row.id() == key)
    }

    fn page_info(&self) -> Option<PageInfo> {
        self.pagination
            .is_enabled()
            .then(|| self.pagination.page_info(self.rows.len()))
    }
}

/// A generic table engine: sorting, selection and pagination over rows of `T`.
///
/// `DataTable<T>` derives an ordered, paginated view and a selection set from
/// caller-owned rows and column descriptors:
/// - Sorting by one column, cycling ascending and descending
/// - Selection over the full row set with a tri-state header status
/// - A page window over the ordered rows
/// - Row actions and host callbacks
///
/// Clones share state. Every operation takes the internal lock once, and
/// callbacks run after it is released, so handlers may call back into the
/// table.
///
/// # Example
///
/// ```
/// use datatable::{CellValue, Column, DataTable, SelectionStatus, TableConfig, TableRow};
///
/// #[derive(Debug, Clone)]
/// struct Person {
///     id: &'static str,
///     name: &'static str,
/// }
///
/// impl TableRow for Person {
///     type Key = &'static str;
///     fn id(&self) -> &'static str { self.id }
///     fn value(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "name" => self.name.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let rows = vec![
///     Person { id: "1", name: "Bob" },
///     Person { id: "2", name: "Amy" },
///     Person { id: "3", name: "Cid" },
/// ];
/// let table = DataTable::new(
///     vec![Column::new("name", "Name")],
///     rows,
///     TableConfig::default().with_selectable(true),
/// );
///
/// table.toggle_sort("name");
/// let names: Vec<_> = table.visible_rows().iter().map(|p| p.name).collect();
/// assert_eq!(names, ["Amy", "Bob", "Cid"]);
///
/// table.toggle_all(true);
/// assert_eq!(table.selection_status(), SelectionStatus::All);
/// ```
pub struct DataTable<T: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner<T>>>,
    /// Row actions.
    actions: Arc<ActionDispatcher<T>>,
    /// Host callbacks.
    events: Arc<TableEvents<T>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow + std::fmt::Debug> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("actions", &self.actions)
            .field("events", &self.events)
            .finish()
    }
}

impl<T: TableRow> DataTable<T> {
    /// Create a table from columns, rows and configuration.
    pub fn new(columns: Vec<Column>, rows: Vec<T>, config: TableConfig) -> Self {
        let inner = TableInner::new(columns, rows, &config);
        log::debug!(
            "created table with {} columns, {} rows (sortable={}, selectable={}, paginated={})",
            inner.columns.len(),
            inner.rows.len(),
            config.sortable,
            config.selectable,
            config.paginated
        );
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            actions: Arc::new(ActionDispatcher::default()),
            events: Arc::new(TableEvents::default()),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Set the row actions.
    pub fn with_actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.actions = Arc::new(ActionDispatcher::new(actions));
        self
    }

    /// Set the host callbacks.
    pub fn with_events(mut self, events: TableEvents<T>) -> Self {
        self.events = Arc::new(events);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.columns().to_vec())
            .unwrap_or_default()
    }

    /// Whether a column can be sorted right now.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.sortable && g.columns.is_sortable(column_id))
            .unwrap_or(false)
    }

    /// Display text of a row's cell, through the column formatter.
    pub fn cell_text(&self, row: &T, column_id: &str) -> String {
        let value = row.value(column_id);
        self.inner
            .read()
            .map(|g| g.columns.format(column_id, &value))
            .unwrap_or_else(|_| value.to_string())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in caller order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Find a row by key.
    pub fn find_row(&self, key: &T::Key) -> Option<T> {
        self.inner.read().ok().and_then(|g| g.find(key).cloned())
    }

    /// Replace the row set.
    ///
    /// Selected keys that are no longer present are dropped, and the host is
    /// notified if that changed the selection. The page index is kept; a page
    /// past the end shows no rows.
    pub fn set_rows(&self, rows: Vec<T>) {
        let pruned = if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            inner.rows = rows;
            inner.order = None;
            let removed = inner.selection.prune(&inner.rows);
            self.mark_dirty();
            log::debug!(
                "{}: set {} rows, pruned {} stale selections",
                self.id,
                inner.rows.len(),
                removed
            );
            (removed > 0).then(|| inner.selected_rows())
        } else {
            None
        };

        if let Some(selected) = pruned {
            self.events.emit_row_select(&selected);
        }
    }

    /// All rows in display order.
    pub fn ordered_rows(&self) -> Vec<T> {
        self.inner
            .write()
            .map(|mut g| g.ordered())
            .unwrap_or_default()
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<T> {
        self.inner
            .write()
            .map(|mut g| g.visible())
            .unwrap_or_default()
    }

    /// Report a click on a row. Returns false if no row has this key.
    pub fn click_row(&self, key: &T::Key) -> bool {
        let Some(row) = self.find_row(key) else {
            log::debug!("{}: click on unknown row {:?}", self.id, key);
            return false;
        };
        self.events.emit_row_click(&row);
        true
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sort.clone())
            .unwrap_or_default()
    }

    /// Toggle sort for a column.
    ///
    /// A different column sorts ascending; the current column flips between
    /// ascending and descending. Unknown or non-sortable columns, and tables
    /// with sorting disabled, ignore the request.
    ///
    /// Returns the new sort key and direction.
    pub fn toggle_sort(&self, column_id: &str) -> Option<(String, SortDirection)> {
        let result = if let Ok(mut guard) = self.inner.write()
            && guard.sortable
        {
            let TableInner { sort, columns, .. } = &mut *guard;
            let result = sort.toggle(column_id, columns);
            if result.is_some() {
                guard.order = None;
                self.mark_dirty();
            }
            result
        } else {
            None
        };

        if let Some((column, direction)) = &result {
            log::debug!("{}: sorted by '{}' {:?}", self.id, column, direction);
            self.events.emit_sort(column, *direction);
        }
        result
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Whether selection is enabled.
    pub fn is_selectable(&self) -> bool {
        self.inner.read().map(|g| g.selectable).unwrap_or(false)
    }

    /// Select every row (not just the visible page), or clear the selection.
    pub fn toggle_all(&self, checked: bool) {
        let selected = if let Ok(mut guard) = self.inner.write()
            && guard.selectable
        {
            let TableInner {
                selection, rows, ..
            } = &mut *guard;
            selection.toggle_all(checked, rows.as_slice());
            self.mark_dirty();
            Some(guard.selected_rows())
        } else {
            None
        };

        if let Some(selected) = selected {
            log::trace!("{}: toggle all -> {} selected", self.id, selected.len());
            self.events.emit_row_select(&selected);
        }
    }

    /// Toggle selection of one row by key.
    ///
    /// Returns true if the row is now selected. Keys not in the row set are
    /// ignored.
    pub fn toggle_one(&self, key: &T::Key) -> bool {
        let outcome = if let Ok(mut guard) = self.inner.write()
            && guard.selectable
            && guard.find(key).is_some()
        {
            let now_selected = guard.selection.toggle_one(key.clone());
            self.mark_dirty();
            Some((now_selected, guard.selected_rows()))
        } else {
            None
        };

        match outcome {
            Some((now_selected, selected)) => {
                log::trace!("{}: toggled {:?} -> {}", self.id, key, now_selected);
                self.events.emit_row_select(&selected);
                now_selected
            }
            None => false,
        }
    }

    /// Toggle selection of a row.
    pub fn toggle_row(&self, row: &T) -> bool {
        self.toggle_one(&row.id())
    }

    /// Header checkbox state over the full row set.
    pub fn selection_status(&self) -> SelectionStatus {
        self.inner
            .read()
            .map(|g| g.selection.status(&g.rows))
            .unwrap_or_default()
    }

    /// Check if a row is selected by key.
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Selected keys, in caller row order.
    pub fn selected_ids(&self) -> Vec<T::Key> {
        self.inner
            .read()
            .map(|g| {
                g.selection
                    .selected_rows(&g.rows)
                    .into_iter()
                    .map(|row| row.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selected rows, in caller row order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Whether rows are split into pages.
    pub fn is_paginated(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.pagination.is_enabled())
            .unwrap_or(false)
    }

    /// Page metadata, `None` when pagination is disabled.
    pub fn page_info(&self) -> Option<PageInfo> {
        self.inner.read().ok().and_then(|g| g.page_info())
    }

    /// Page sizes offered to the user.
    pub fn rows_per_page_options(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|g| g.pagination.rows_per_page_options().to_vec())
            .unwrap_or_default()
    }

    /// Go to a page. Ignored when pagination is disabled.
    pub fn set_page(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && guard.pagination.is_enabled()
            && guard.pagination.page_index() != index
        {
            guard.pagination.set_page(index);
            self.mark_dirty();
        }
    }

    /// Change the page size and return to the first page. Ignored when
    /// pagination is disabled.
    pub fn set_page_size(&self, size: usize) {
        if let Ok(mut guard) = self.inner.write()
            && guard.pagination.is_enabled()
        {
            guard.pagination.set_page_size(size);
            self.mark_dirty();
            log::trace!(
                "{}: page size {} (requested {})",
                self.id,
                guard.pagination.page_size(),
                size
            );
        }
    }

    /// Advance one page. Returns true if the page changed.
    pub fn next_page(&self) -> bool {
        self.update_page(|p, total| p.next_page(total))
    }

    /// Go back one page. Returns true if the page changed.
    pub fn previous_page(&self) -> bool {
        self.update_page(|p, total| p.previous_page(total))
    }

    /// Go to the first page.
    pub fn first_page(&self) {
        self.set_page(0);
    }

    /// Go to the last page.
    pub fn last_page(&self) {
        self.update_page(|p, total| {
            let before = p.page_index();
            p.last_page(total);
            p.page_index() != before
        });
    }

    fn update_page(&self, f: impl FnOnce(&mut Pagination, usize) -> bool) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.pagination.is_enabled()
        {
            let total = guard.rows.len();
            let moved = f(&mut guard.pagination, total);
            if moved {
                self.mark_dirty();
            }
            return moved;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// The declared row actions.
    pub fn actions(&self) -> &[RowAction<T>] {
        self.actions.actions()
    }

    /// Invoke action `index` on the row with `key`.
    ///
    /// Returns false if either the action or the row does not exist.
    pub fn invoke_action(&self, index: usize, key: &T::Key) -> bool {
        let Some(row) = self.find_row(key) else {
            log::debug!("{}: action {} on unknown row {:?}", self.id, index, key);
            return false;
        };
        self.actions.invoke(index, &row)
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Snapshot of the current page for rendering.
    pub fn view(&self) -> TableView<T> {
        let Ok(mut guard) = self.inner.write() else {
            return TableView {
                columns: Vec::new(),
                rows: Vec::new(),
                header: SelectionStatus::None,
                page: None,
                rows_per_page_options: Vec::new(),
                sort: SortState::none(),
                selectable: false,
                sortable: false,
            };
        };

        let rows = guard
            .visible()
            .into_iter()
            .map(|row| {
                let selected = guard.selection.is_selected(&row.id());
                ViewRow { row, selected }
            })
            .collect();

        TableView {
            columns: guard.columns.columns().to_vec(),
            rows,
            header: guard.selection.status(&guard.rows),
            page: guard.page_info(),
            rows_per_page_options: guard.pagination.rows_per_page_options().to_vec(),
            sort: guard.sort.clone(),
            selectable: guard.selectable,
            sortable: guard.sortable,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            actions: Arc::clone(&self.actions),
            events: Arc::clone(&self.events),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Default for DataTable<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), TableConfig::default())
    }
}
