//! Application Context
//!
//! Todo state and controller provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::TodoState;

use crate::store::UiController;

#[derive(Clone)]
pub struct TodoContext {
    /// State rendered by the view
    pub state: RwSignal<TodoState>,
    /// Entry point for every user action
    pub controller: UiController,
}

impl TodoContext {
    pub fn new(state: RwSignal<TodoState>, controller: UiController) -> Self {
        Self { state, controller }
    }
}

/// Get the todo context provided by `App`
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
