//! Todo List Component
//!
//! Form, error banner and the list itself, with loading and empty states.

use leptos::prelude::*;
use todo_core::Todo;

use super::{ErrorBanner, NewTodoForm, TodoItem};
use crate::context::use_todos;

#[component]
pub fn TodoList() -> impl IntoView {
    let state = use_todos().state;

    view! {
        <section class="todo-list">
            <NewTodoForm />
            <ErrorBanner />
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! {
                    <p class="status">
                        "Loading todos… Supabase is warming up, first load may take a moment!"
                    </p>
                }
            >
                <Show
                    when=move || state.with(|s| !s.todos.is_empty())
                    fallback=|| view! { <p class="status">"No todos yet. Add your first task!"</p> }
                >
                    <ul class="todo-items">
                        <For
                            each=move || state.with(|s| s.todos.clone())
                            // re-render a row when the store hands back a changed version
                            key=|todo: &Todo| (todo.id.clone(), todo.is_complete, todo.task.clone())
                            children=move |todo: Todo| view! { <TodoItem todo=todo /> }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
