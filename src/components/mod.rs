//! UI Components
//!
//! Leptos components for the todo demo.

mod error_banner;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use error_banner::ErrorBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
