//! Todo List State
//!
//! Everything the view renders: the list, the draft input, the loading flag,
//! the single error slot and the in-flight guard.

use std::cell::RefCell;
use std::rc::Rc;

use crate::guard::{OpGuard, OpKey};
use crate::model::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    /// Newest first
    pub todos: Vec<Todo>,
    /// Text of the add-todo input
    pub draft: String,
    pub loading: bool,
    /// Latest error, cleared by the latest success
    pub error: Option<String>,
    in_flight: OpGuard<OpKey>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            loading: true,
            error: None,
            in_flight: OpGuard::new(),
        }
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A create is in flight
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_held(&OpKey::Create)
    }

    /// A toggle or delete is in flight for this item
    pub fn is_pending(&self, id: &str) -> bool {
        self.in_flight.is_held(&OpKey::item(id))
    }

    /// Whether the add control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.draft.trim().is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub(crate) fn acquire(&mut self, key: OpKey) -> bool {
        self.in_flight.try_acquire(key)
    }

    pub(crate) fn release(&mut self, key: &OpKey) {
        self.in_flight.release(key);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.error = None;
        self.loading = false;
    }

    pub(crate) fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
        self.draft.clear();
        self.error = None;
    }

    pub(crate) fn replace_item(&mut self, updated: Todo) {
        if let Some(item) = self.todos.iter_mut().find(|item| item.id == updated.id) {
            *item = updated;
        }
        self.error = None;
    }

    pub(crate) fn remove_item(&mut self, id: &str) {
        self.todos.retain(|item| item.id != id);
        self.error = None;
    }
}

/// Access to state owned elsewhere (a reactive signal, a shared cell).
///
/// Both methods return `None` once the owner has been disposed.
pub trait StateHandle: Clone {
    fn try_update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;

    fn try_with<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
}

impl StateHandle for Rc<RefCell<TodoState>> {
    fn try_update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn try_with<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
