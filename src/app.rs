//! Todo Starter App
//!
//! Wires the store connection, state and controller together and starts the
//! initial load on mount.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{RestTodoStore, TodoController, TodoState};

use crate::components::TodoList;
use crate::config;
use crate::context::TodoContext;
use crate::store::SignalState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(TodoState::new());
    let store = config::store_config().map(|config| Arc::new(RestTodoStore::new(config)));
    let controller = TodoController::new(store, SignalState::new(state));

    provide_context(TodoContext::new(state, controller.clone()));

    // Initial load on mount
    let loader = controller.clone();
    Effect::new(move |_| {
        let loader = loader.clone();
        spawn_local(async move {
            let outcome = loader.load().await;
            log::debug!("Initial load finished: {:?}", outcome);
        });
    });

    // Stop retrying once the view is gone
    on_cleanup(move || controller.teardown());

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <p class="subtitle">"Stored in Supabase. Add, complete and delete tasks below."</p>
            <TodoList />
        </main>
    }
}
