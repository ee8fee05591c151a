//! Resource-specific behavior injected into the engine.

use crate::filters::Filters;

/// Callback producing the confirm-delete prompt for an entity.
pub type DeletePrompt<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Confirmation gate evaluated before a delete ticket is opened.
///
/// Receives the resource-specific prompt; returning `false` makes the
/// delete a no-op. UI surfaces wire this to a confirm dialog; services that
/// treat the HTTP request itself as confirmation pass an always-true gate.
pub type ConfirmGate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Export callback, invoked with a snapshot of the current items and
/// filters. Purely side-effecting; must not assume exclusive access to the
/// engine.
pub type ExportFn<T> = Box<dyn Fn(&[T], &Filters) + Send + Sync>;

/// Per-resource hooks for an [`crate::EntityManager`].
pub struct ResourceHooks<T> {
    pub(crate) delete_prompt: DeletePrompt<T>,
    pub(crate) confirm: ConfirmGate,
    pub(crate) export: ExportFn<T>,
}

impl<T> ResourceHooks<T> {
    /// Hooks with neutral defaults: a generic delete prompt, an
    /// always-confirming gate, and a no-op export.
    pub fn new() -> Self {
        Self {
            delete_prompt: Box::new(|_: &T| {
                "Delete this item? This cannot be undone.".to_string()
            }),
            confirm: Box::new(|_: &str| true),
            export: Box::new(|_: &[T], _: &Filters| {}),
        }
    }

    pub fn with_delete_prompt(
        mut self,
        prompt: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.delete_prompt = Box::new(prompt);
        self
    }

    pub fn with_confirm_gate(mut self, gate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.confirm = Box::new(gate);
        self
    }

    pub fn with_export(mut self, export: impl Fn(&[T], &Filters) + Send + Sync + 'static) -> Self {
        self.export = Box::new(export);
        self
    }
}

impl<T> Default for ResourceHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}
