//! Reactive Todo State
//!
//! Binds the controller's state to a Leptos signal so every change the
//! controller makes re-renders the view.

use leptos::prelude::*;
use todo_core::{RestTodoStore, StateHandle, TodoController, TodoState};

/// Controller as wired into the UI
pub type UiController = TodoController<RestTodoStore, SignalState>;

/// `TodoState` held in a signal. A disposed signal reads as torn down.
#[derive(Clone, Copy)]
pub struct SignalState(RwSignal<TodoState>);

impl SignalState {
    pub fn new(signal: RwSignal<TodoState>) -> Self {
        Self(signal)
    }
}

impl StateHandle for SignalState {
    fn try_update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn try_with<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with(f)
    }
}
