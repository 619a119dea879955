//! Column descriptors and the column model.

use std::fmt;
use std::sync::Arc;

use crate::value::{CellValue, ValueKind};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom value formatter for a column.
pub type Formatter = Arc<dyn Fn(&CellValue) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: identity, header label,
/// layout hints, formatting and whether the column is sortable.
///
/// # Examples
///
/// ```
/// use datatable::{Alignment, Column, ValueKind};
///
/// let columns = vec![
///     Column::new("title", "Title").min_width(30),
///     Column::new("budget", "Budget")
///         .align(Alignment::Right)
///         .kind(ValueKind::Number)
///         .format(|v| format!("${}", v)),
///     Column::new("actions", "").not_sortable(),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique identifier, also the key passed to [`TableRow::value`](crate::TableRow::value).
    pub id: String,
    /// Header text.
    pub label: String,
    /// Minimum rendered width, a hint for the renderer.
    pub min_width: Option<u16>,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether this column participates in sorting. Defaults to `true`.
    pub sortable: bool,
    /// Whether the renderer may offer filtering on this column.
    /// The engine does not use this.
    pub filterable: bool,
    /// Declared value kind. When `None` the kind is inferred from the rows.
    pub kind: Option<ValueKind>,
    formatter: Option<Formatter>,
}

impl Column {
    /// Create a sortable column with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min_width: None,
            align: Alignment::Left,
            sortable: true,
            filterable: false,
            kind: None,
            formatter: None,
        }
    }

    /// Set the minimum width hint.
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a custom value formatter.
    pub fn format<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Exclude the column from sorting.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Mark the column as filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Declare the value kind used to compare this column.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether a custom formatter is set.
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Format a value for display through this column.
    pub fn format_value(&self, value: &CellValue) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("min_width", &self.min_width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("kind", &self.kind)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Ordered, immutable set of columns for one table.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: Vec<Column>,
}

impl ColumnModel {
    /// Create a model from column descriptors, in display order.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// All columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether a column can be sorted. Unknown ids are not sortable.
    pub fn is_sortable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|c| c.sortable)
    }

    /// Format a value for a column.
    ///
    /// Unknown column ids fall back to the value's display string.
    pub fn format(&self, id: &str, value: &CellValue) -> String {
        match self.get(id) {
            Some(column) => column.format_value(value),
            None => {
                log::debug!("format requested for unknown column '{}'", id);
                value.to_string()
            }
        }
    }
}
