//! Store Capability
//!
//! Abstract interface to the remote todo table. Implementations: the REST
//! client in `rest`, scripted fakes in tests.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::TodoRow;

/// Reply to a list query: rows, error and HTTP status side by side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectResponse {
    pub data: Option<Vec<TodoRow>>,
    pub error: Option<StoreError>,
    /// 0 when no response was received
    pub status: u16,
}

impl SelectResponse {
    pub fn ok(rows: Vec<TodoRow>) -> Self {
        Self {
            data: Some(rows),
            error: None,
            status: 200,
        }
    }

    pub fn failed(error: StoreError) -> Self {
        Self {
            status: error.status(),
            data: None,
            error: Some(error),
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

/// Remote table of todos.
///
/// Futures are not `Send`: the browser runs everything on one thread.
/// Single-row calls return `Ok(None)` when the store replied with neither
/// a row nor an error.
#[async_trait(?Send)]
pub trait TodoStore {
    /// Up to `limit` rows, newest `inserted_at` first
    async fn select_recent(&self, limit: usize) -> SelectResponse;

    /// Insert a row with `task` and read it back
    async fn insert(&self, task: &str) -> Result<Option<TodoRow>, StoreError>;

    /// Set `is_complete` on the row with `id` and read it back
    async fn set_complete(&self, id: &str, is_complete: bool) -> Result<Option<TodoRow>, StoreError>;

    /// Delete the row with `id`
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
