//! Todo List Controller
//!
//! Owns the initial load (retried until the store hands back rows) and routes
//! create, toggle and delete through the store, reflecting each result in the
//! shared state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::delay;
use crate::guard::OpKey;
use crate::model::{normalize, Todo};
use crate::state::StateHandle;
use crate::store::{SelectResponse, TodoStore};


/// Shown when no store connection is configured at all
pub const NOT_CONFIGURED: &str =
    "Supabase is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY when building the app.";

/// Shown when a mutation is attempted without a store
pub const CLIENT_UNAVAILABLE: &str = "Supabase client is unavailable.";

const UNKNOWN_FETCH_ERROR: &str = "Unknown fetch error";

/// How the initial load queries and retries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Most recent rows requested
    pub limit: usize,
    /// Fixed pause between attempts
    pub retry_delay: Duration,
    /// Treat an empty result as a failed attempt.
    ///
    /// On by default: a cold store and an empty table look the same, so an
    /// empty table keeps the loader retrying.
    pub retry_on_empty: bool,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            limit: 25,
            retry_delay: Duration::from_secs(1),
            retry_on_empty: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// List replaced with this many items
    Ready(usize),
    /// No store connection; the configuration error is displayed
    Unconfigured,
    /// Torn down before a successful attempt
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Store confirmed and the list was updated
    Applied,
    /// Store reported an error; it is in the error slot
    Failed,
    /// Store replied without a row or an error
    NoChange,
    /// Not issued: empty input, unknown item, or the same operation already in flight
    Rejected,
}

/// Mediates every todo operation between the view state and the store
pub struct TodoController<S, H> {
    store: Option<Arc<S>>,
    state: H,
    policy: LoadPolicy,
    torn_down: Arc<AtomicBool>,
}

impl<S, H: Clone> Clone for TodoController<S, H> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: self.state.clone(),
            policy: self.policy,
            torn_down: self.torn_down.clone(),
        }
    }
}

impl<S: TodoStore, H: StateHandle> TodoController<S, H> {
    pub fn new(store: Option<Arc<S>>, state: H) -> Self {
        Self {
            store,
            state,
            policy: LoadPolicy::default(),
            torn_down: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop this instance (and its clones) from applying further load attempts
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Tear this instance down and return one bound to `store` over the same state.
    ///
    /// Nothing is fetched until `load` is called on the returned controller.
    pub fn reconnect(&self, store: Option<Arc<S>>) -> Self {
        self.teardown();
        Self {
            store,
            state: self.state.clone(),
            policy: self.policy,
            torn_down: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.try_update(|s| s.draft = text);
    }

    /// Initial load: retry with a fixed delay until the store returns rows
    pub async fn load(&self) -> LoadOutcome {
        let Some(store) = self.store.clone() else {
            warn!("No store configured, skipping todo load");
            self.state.try_update(|s| {
                s.fail(NOT_CONFIGURED);
                s.loading = false;
            });
            return LoadOutcome::Unconfigured;
        };

        if self.state.try_update(|s| s.loading = true).is_none() {
            return LoadOutcome::Cancelled;
        }

        let mut attempt = 0u32;
        loop {
            if self.is_torn_down() {
                return LoadOutcome::Cancelled;
            }
            attempt += 1;
            debug!("Fetching todos, attempt {}", attempt);

            let response = store.select_recent(self.policy.limit).await;
            if self.is_torn_down() {
                return LoadOutcome::Cancelled;
            }

            match self.accept(response) {
                Ok(todos) => {
                    let count = todos.len();
                    if self.state.try_update(|s| s.replace_all(todos)).is_none() {
                        return LoadOutcome::Cancelled;
                    }
                    info!("Loaded {} todos after {} attempt(s)", count, attempt);
                    return LoadOutcome::Ready(count);
                }
                Err(message) => {
                    warn!("Todo load attempt {} failed: {}", attempt, message);
                    if self.state.try_update(|s| s.fail(message)).is_none() {
                        return LoadOutcome::Cancelled;
                    }
                }
            }

            delay::sleep(self.policy.retry_delay).await;
        }
    }

    fn accept(&self, response: SelectResponse) -> Result<Vec<Todo>, String> {
        if let Some(error) = response.error {
            return Err(error.to_string());
        }
        if response.status != 200 {
            return Err(match response.status {
                0 => UNKNOWN_FETCH_ERROR.to_string(),
                status => format!("Unexpected status: {}", status),
            });
        }
        let rows = response.data.unwrap_or_default();
        if rows.is_empty() && self.policy.retry_on_empty {
            return Err(UNKNOWN_FETCH_ERROR.to_string());
        }
        Ok(rows.into_iter().map(normalize).collect())
    }

    /// Insert the trimmed draft and put the stored row at the front of the list
    pub async fn create(&self) -> MutationOutcome {
        let Some(task) = self.state.try_with(|s| s.draft.trim().to_string()) else {
            return MutationOutcome::Rejected;
        };
        if task.is_empty() {
            return MutationOutcome::Rejected;
        }
        if self.state.try_with(|s| s.is_submitting()).unwrap_or(true) {
            return MutationOutcome::Rejected;
        }
        let Some(store) = self.store.clone() else {
            self.state.try_update(|s| s.fail(CLIENT_UNAVAILABLE));
            return MutationOutcome::Failed;
        };

        let key = OpKey::Create;
        if !self.begin(&key) {
            return MutationOutcome::Rejected;
        }

        debug!("Creating todo");
        let outcome = match store.insert(&task).await {
            Ok(Some(row)) => {
                let todo = normalize(row);
                self.state.try_update(|s| s.prepend(todo));
                MutationOutcome::Applied
            }
            Ok(None) => MutationOutcome::NoChange,
            Err(err) => {
                warn!("Create failed: {}", err);
                self.state.try_update(|s| s.fail(err.to_string()));
                MutationOutcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Flip `is_complete` on one item and swap in the stored row
    pub async fn toggle(&self, id: &str) -> MutationOutcome {
        let Some(store) = self.store.clone() else {
            self.state.try_update(|s| s.fail(CLIENT_UNAVAILABLE));
            return MutationOutcome::Failed;
        };
        let Some(current) = self
            .state
            .try_with(|s| s.find(id).map(|todo| todo.is_complete))
            .flatten()
        else {
            return MutationOutcome::Rejected;
        };

        let key = OpKey::item(id);
        if !self.begin(&key) {
            debug!("Toggle on {} skipped, already pending", id);
            return MutationOutcome::Rejected;
        }

        debug!("Toggling todo {}", id);
        let outcome = match store.set_complete(id, !current).await {
            Ok(Some(row)) => {
                let updated = normalize(row);
                self.state.try_update(|s| s.replace_item(updated));
                MutationOutcome::Applied
            }
            Ok(None) => MutationOutcome::NoChange,
            Err(err) => {
                warn!("Toggle on {} failed: {}", id, err);
                self.state.try_update(|s| s.fail(err.to_string()));
                MutationOutcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Delete one item; it stays in the list unless the store confirms
    pub async fn delete(&self, id: &str) -> MutationOutcome {
        let Some(store) = self.store.clone() else {
            self.state.try_update(|s| s.fail(CLIENT_UNAVAILABLE));
            return MutationOutcome::Failed;
        };

        let key = OpKey::item(id);
        if !self.begin(&key) {
            debug!("Delete on {} skipped, already pending", id);
            return MutationOutcome::Rejected;
        }

        debug!("Deleting todo {}", id);
        let outcome = match store.delete(id).await {
            Ok(()) => {
                self.state.try_update(|s| s.remove_item(id));
                MutationOutcome::Applied
            }
            Err(err) => {
                warn!("Delete on {} failed: {}", id, err);
                self.state.try_update(|s| s.fail(err.to_string()));
                MutationOutcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    fn begin(&self, key: &OpKey) -> bool {
        self.state
            .try_update(|s| s.acquire(key.clone()))
            .unwrap_or(false)
    }

    fn finish(&self, key: &OpKey) {
        self.state.try_update(|s| s.release(key));
    }
}
