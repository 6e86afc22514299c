//! REST Store Client
//!
//! Talks to a PostgREST endpoint (Supabase's `/rest/v1`) with the project's
//! anon key.

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{TodoRow, TODO_COLUMNS};
use crate::store::{SelectResponse, TodoStore};

/// Media type asking PostgREST for a single object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

// ========================
// Query Builder
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Query-string parameters for one table request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        let columns: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.params.push(("select".to_string(), columns));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        let suffix = match direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, suffix)));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    /// Filter `column = value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

// ========================
// Client
// ========================

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// `TodoStore` backed by a PostgREST table
#[derive(Debug, Clone)]
pub struct RestTodoStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl RestTodoStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, query: &Query) -> RequestBuilder {
        self.http
            .request(method, self.config.table_url())
            .query(query.params())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    /// Request that writes and reads back exactly one row
    fn single(&self, method: Method, query: &Query, body: Value) -> RequestBuilder {
        self.request(method, query)
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&body)
    }
}

async fn error_from(response: Response) -> StoreError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorBody>(&text).ok();
    let code = body.as_ref().and_then(|b| b.code.clone());
    let message = body
        .and_then(|b| b.message)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    StoreError::Api {
        status: status.as_u16(),
        message,
        code,
    }
}

async fn read_single(response: Response) -> Result<Option<TodoRow>, StoreError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: Value =
        serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
    let value = match value {
        Value::Null => return Ok(None),
        Value::Array(rows) => match rows.into_iter().next() {
            Some(row) => row,
            None => return Ok(None),
        },
        other => other,
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoStore for RestTodoStore {
    async fn select_recent(&self, limit: usize) -> SelectResponse {
        let query = Query::new()
            .select(TODO_COLUMNS)
            .order("inserted_at", Direction::Descending)
            .limit(limit);
        debug!("GET {} {:?}", self.config.table_url(), query.params());

        let response = match self.request(Method::GET, &query).send().await {
            Ok(response) => response,
            Err(err) => return SelectResponse::failed(err.into()),
        };
        let status = response.status();
        if !status.is_success() {
            return SelectResponse::failed(error_from(response).await);
        }
        match response.json::<Vec<TodoRow>>().await {
            Ok(rows) => SelectResponse {
                data: Some(rows),
                error: None,
                status: status.as_u16(),
            },
            Err(err) => SelectResponse {
                data: None,
                error: Some(StoreError::Decode(err.to_string())),
                status: status.as_u16(),
            },
        }
    }

    async fn insert(&self, task: &str) -> Result<Option<TodoRow>, StoreError> {
        let query = Query::new().select(TODO_COLUMNS);
        let response = self
            .single(Method::POST, &query, json!({ "task": task }))
            .send()
            .await?;
        read_single(response).await
    }

    async fn set_complete(&self, id: &str, is_complete: bool) -> Result<Option<TodoRow>, StoreError> {
        let query = Query::new().eq("id", id).select(TODO_COLUMNS);
        let response = self
            .single(Method::PATCH, &query, json!({ "is_complete": is_complete }))
            .send()
            .await?;
        read_single(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let query = Query::new().eq("id", id);
        let response = self.request(Method::DELETE, &query).send().await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        Ok(())
    }
}
