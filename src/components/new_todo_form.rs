//! New Todo Form Component
//!
//! Text input plus Add button; both disabled while a create is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todos;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;

    let on_submit = {
        let controller = ctx.controller.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.create().await;
            });
        }
    };

    let on_input = {
        let controller = ctx.controller.clone();
        move |ev: web_sys::Event| controller.set_draft(event_target_value(&ev))
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a todo"
                prop:value=move || state.with(|s| s.draft.clone())
                disabled=move || state.with(|s| s.is_submitting())
                on:input=on_input
            />
            <button type="submit" disabled=move || !state.with(|s| s.can_submit())>
                {move || if state.with(|s| s.is_submitting()) { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}
