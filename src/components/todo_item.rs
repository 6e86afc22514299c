//! Todo Item Component
//!
//! One row: completion toggle and delete. Both are disabled while a
//! mutation on this item is pending.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::Todo;

use crate::context::use_todos;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;

    let pending = {
        let id = todo.id.clone();
        move || state.with(|s| s.is_pending(&id))
    };

    let on_toggle = {
        let controller = ctx.controller.clone();
        let id = todo.id.clone();
        move |_: web_sys::MouseEvent| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = controller.toggle(&id).await;
            });
        }
    };

    let on_delete = {
        let controller = ctx.controller.clone();
        let id = todo.id.clone();
        move |_: web_sys::MouseEvent| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = controller.delete(&id).await;
            });
        }
    };

    let completed = todo.is_complete;

    view! {
        <li class="todo-row">
            <button type="button" class="todo-toggle" disabled=pending.clone() on:click=on_toggle>
                <span class=if completed { "checkbox checked" } else { "checkbox" } aria-hidden="true">
                    {if completed { "✓" } else { "" }}
                </span>
                <span class=if completed { "todo-text completed" } else { "todo-text" }>
                    {todo.task}
                </span>
            </button>
            <button type="button" class="delete-btn" disabled=pending on:click=on_delete>
                "Delete"
            </button>
        </li>
    }
}
