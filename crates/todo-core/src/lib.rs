//! Todo Core
//!
//! Todo list state and the controller that mediates every load, create,
//! toggle and delete through a remote tabular store.

mod config;
mod controller;
mod delay;
mod error;
mod guard;
mod model;
mod rest;
mod state;
mod store;

pub use config::StoreConfig;
pub use controller::{
    LoadOutcome, LoadPolicy, MutationOutcome, TodoController, CLIENT_UNAVAILABLE, NOT_CONFIGURED,
};
pub use error::StoreError;
pub use guard::{OpGuard, OpKey};
pub use model::{normalize, Todo, TodoRow, TODO_COLUMNS};
pub use rest::{Direction, Query, RestTodoStore};
pub use state::{StateHandle, TodoState};
pub use store::{SelectResponse, TodoStore};
