//! The TableRow trait implemented by caller row types.

use std::fmt::Debug;
use std::hash::Hash;

use crate::value::CellValue;

/// Trait for records that can be held by a [`DataTable`](crate::DataTable).
///
/// The table only ever touches a row through its identity and the values it
/// exposes per column. Rows are never mutated.
///
/// # Examples
///
/// ```
/// use datatable::{CellValue, TableRow};
///
/// #[derive(Debug, Clone)]
/// struct Quote {
///     id: u32,
///     client: String,
///     amount: i64,
/// }
///
/// impl TableRow for Quote {
///     type Key = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn value(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "client" => self.client.as_str().into(),
///             "amount" => self.amount.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Identity type. Must be unique and stable across row set updates.
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// Unique identifier for this row.
    ///
    /// Used for selection, which survives sorting, paging and row updates.
    fn id(&self) -> Self::Key;

    /// Value of this row for a column.
    ///
    /// Returns [`CellValue::Empty`] for unknown column ids.
    fn value(&self, column_id: &str) -> CellValue;
}
