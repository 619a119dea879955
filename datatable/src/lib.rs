//! Generic tabular data engine.
//!
//! `datatable` holds a caller-owned row set and derives from it everything a
//! table renderer needs: a sorted order, a paginated window and a selection
//! with a tri-state header status. It never renders, fetches or persists.
//!
//! Rows implement [`TableRow`]; columns are [`Column`] descriptors; the engine
//! itself is [`DataTable`], configured through [`TableConfig`].
//!
//! ```text
//! rows ──► sort (columns + comparator) ──► ordered ──► page window ──► visible
//!   └────► selection (full row set) ─────────────────────────────────► header state
//! ```

pub mod action;
pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod pagination;
pub mod row;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;
pub mod view;

pub use action::{ActionDispatcher, RowAction};
pub use column::{Alignment, Column, ColumnModel, Formatter};
pub use config::{DEFAULT_PAGE_SIZE, TableConfig};
pub use error::ConfigError;
pub use events::TableEvents;
pub use pagination::{PageInfo, Pagination};
pub use row::TableRow;
pub use selection::{Selection, SelectionStatus};
pub use sort::{SortDirection, SortState};
pub use table::{DataTable, TableId};
pub use value::{CellValue, Comparator, ValueKind};
pub use view::{TableView, ViewRow};
