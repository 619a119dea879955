//! Row-scoped actions.

use std::fmt;
use std::sync::Arc;

/// Handler invoked with the row an action was triggered on.
pub type ActionHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// An action the renderer offers on every row (edit, delete, ...).
pub struct RowAction<T> {
    /// Label or tooltip text.
    pub label: String,
    /// Optional icon name, interpreted by the renderer.
    pub icon: Option<String>,
    handler: ActionHandler<T>,
}

impl<T> RowAction<T> {
    /// Create an action with a label and handler.
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
        }
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Forwards action invocations to their handlers.
///
/// Holds no state beyond the action list.
pub struct ActionDispatcher<T> {
    actions: Vec<RowAction<T>>,
}

impl<T> Default for ActionDispatcher<T> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl<T> Clone for ActionDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<T> fmt::Debug for ActionDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.actions).finish()
    }
}

impl<T> ActionDispatcher<T> {
    /// Create a dispatcher over the given actions, in display order.
    pub fn new(actions: Vec<RowAction<T>>) -> Self {
        Self { actions }
    }

    /// The declared actions.
    pub fn actions(&self) -> &[RowAction<T>] {
        &self.actions
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are declared.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Invoke action `index` on `row`. Returns false if there is no such action.
    pub fn invoke(&self, index: usize, row: &T) -> bool {
        match self.actions.get(index) {
            Some(action) => {
                (action.handler)(row);
                true
            }
            None => {
                log::debug!(
                    "no action at index {} ({} declared)",
                    index,
                    self.actions.len()
                );
                false
            }
        }
    }
}
