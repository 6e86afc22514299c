//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_todos;

/// Latest error message, hidden when the slot is empty
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_todos().state;

    move || {
        state
            .with(|s| s.error.clone())
            .map(|message| view! { <div class="error-banner" role="alert">{message}</div> })
    }
}
