//! Table configuration.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::pagination::Pagination;
use crate::sort::SortState;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Construction flags for a [`DataTable`](crate::DataTable).
///
/// Invalid values never fail: a page size below 1 is clamped to 1.
///
/// # Example
///
/// ```
/// use datatable::{SortState, TableConfig};
///
/// let config = TableConfig::default()
///     .with_selectable(true)
///     .with_page_size(25)
///     .with_rows_per_page_options(vec![10, 25, 50])
///     .with_initial_sort(SortState::desc("created_at"));
///
/// let parsed = TableConfig::from_json(r#"{ "selectable": true, "page_size": 0 }"#).unwrap();
/// assert_eq!(parsed.page_size, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Whether header clicks sort rows.
    ///
    /// Default: true
    pub sortable: bool,

    /// Whether rows can be selected.
    ///
    /// Default: false
    pub selectable: bool,

    /// Whether rows are split into pages.
    ///
    /// Default: true
    pub paginated: bool,

    /// Rows per page.
    ///
    /// Default: 10
    #[serde(deserialize_with = "deserialize_page_size")]
    pub page_size: usize,

    /// Page sizes offered to the user.
    ///
    /// Default: none
    pub rows_per_page_options: Vec<usize>,

    /// Sort applied when the table is created.
    ///
    /// Default: unsorted
    pub initial_sort: SortState,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            sortable: true,
            selectable: false,
            paginated: true,
            page_size: DEFAULT_PAGE_SIZE,
            rows_per_page_options: Vec::new(),
            initial_sort: SortState::none(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enables or disables sorting.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enables or disables selection.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Enables or disables pagination.
    pub fn with_paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    /// Sets the page size, clamped to at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the page sizes offered to the user.
    pub fn with_rows_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.rows_per_page_options = options;
        self
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = sort;
        self
    }

    pub(crate) fn pagination(&self) -> Pagination {
        if self.paginated {
            Pagination::new(self.page_size).with_options(self.rows_per_page_options.clone())
        } else {
            Pagination::disabled()
        }
    }
}

fn deserialize_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let size = i64::deserialize(deserializer)?;
    Ok(usize::try_from(size).unwrap_or(0).max(1))
}
