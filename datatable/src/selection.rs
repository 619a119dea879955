//! Row selection tracking.
//!
//! Selection is a dataset-level concept: it is keyed by row identity and
//! always measured against the full row set, never against the visible page.

use std::collections::HashSet;

use crate::row::TableRow;

/// Tri-state status of the selection relative to the full row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStatus {
    /// Nothing selected.
    #[default]
    None,
    /// Some, but not all, rows selected.
    Some,
    /// Every row selected.
    All,
}

impl SelectionStatus {
    /// Whether the header checkbox should render checked.
    pub fn is_checked(self) -> bool {
        self == SelectionStatus::All
    }

    /// Whether the header checkbox should render indeterminate.
    pub fn is_indeterminate(self) -> bool {
        self == SelectionStatus::Some
    }
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + std::hash::Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + std::hash::Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + std::hash::Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected keys, including any not present in the rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate the selected keys in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Toggle a key. Returns true if it is now selected.
    pub fn toggle_one(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl<K: Clone + Eq + std::hash::Hash> Selection<K> {
    /// Select every row in `rows`, or clear the selection.
    pub fn toggle_all<T>(&mut self, checked: bool, rows: &[T])
    where
        T: TableRow<Key = K>,
    {
        self.selected.clear();
        if checked {
            self.selected.extend(rows.iter().map(|row| row.id()));
        }
    }

    /// Number of selected keys that belong to `rows`.
    pub fn count_in<T>(&self, rows: &[T]) -> usize
    where
        T: TableRow<Key = K>,
    {
        if self.selected.is_empty() {
            return 0;
        }
        rows.iter()
            .filter(|row| self.selected.contains(&row.id()))
            .count()
    }

    /// Tri-state status against the full row set.
    ///
    /// Keys that no longer belong to `rows` are not counted.
    pub fn status<T>(&self, rows: &[T]) -> SelectionStatus
    where
        T: TableRow<Key = K>,
    {
        let count = self.count_in(rows);
        if count == 0 {
            SelectionStatus::None
        } else if count == rows.len() {
            SelectionStatus::All
        } else {
            SelectionStatus::Some
        }
    }

    /// Selected rows in full-set order.
    pub fn selected_rows<'a, T>(&self, rows: &'a [T]) -> Vec<&'a T>
    where
        T: TableRow<Key = K>,
    {
        rows.iter()
            .filter(|row| self.selected.contains(&row.id()))
            .collect()
    }

    /// Drop keys that are not present in `rows`. Returns how many were dropped.
    pub fn prune<T>(&mut self, rows: &[T]) -> usize
    where
        T: TableRow<Key = K>,
    {
        if self.selected.is_empty() {
            return 0;
        }
        let present: HashSet<K> = rows.iter().map(|row| row.id()).collect();
        let before = self.selected.len();
        self.selected.retain(|key| present.contains(key));
        before - self.selected.len()
    }
}
