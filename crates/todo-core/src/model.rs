//! Todo Models
//!
//! Loosely-typed store rows and the strict in-memory item they normalize to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Columns requested on every read-back
pub const TODO_COLUMNS: &str = "id,task,is_complete,inserted_at";

/// Todo item as held by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub is_complete: bool,
    pub inserted_at: Option<String>,
}

/// Raw row as returned by the store (any column may be null or absent)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoRow {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub is_complete: Option<bool>,
    #[serde(default)]
    pub inserted_at: Option<String>,
}

/// Convert a store row into a UI-safe item
pub fn normalize(row: TodoRow) -> Todo {
    let id = match row.id {
        Value::String(s) => s,
        other => other.to_string(),
    };
    Todo {
        id,
        task: row.task.unwrap_or_default(),
        is_complete: row.is_complete.unwrap_or(false),
        inserted_at: row.inserted_at,
    }
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        normalize(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_null_row() {
        let row: TodoRow = serde_json::from_value(json!({
            "id": null,
            "task": null,
            "is_complete": null,
            "inserted_at": null
        }))
        .unwrap();

        let todo = normalize(row);
        assert_eq!(todo.id, "null");
        assert_eq!(todo.task, "");
        assert!(!todo.is_complete);
        assert_eq!(todo.inserted_at, None);
    }

    #[test]
    fn test_normalize_numeric_id() {
        let row: TodoRow = serde_json::from_value(json!({
            "id": 42,
            "task": "Buy milk",
            "is_complete": true,
            "inserted_at": "2024-05-01T10:00:00+00:00"
        }))
        .unwrap();

        let todo = Todo::from(row);
        assert_eq!(todo.id, "42");
        assert_eq!(todo.task, "Buy milk");
        assert!(todo.is_complete);
        assert_eq!(todo.inserted_at.as_deref(), Some("2024-05-01T10:00:00+00:00"));
    }

    #[test]
    fn test_normalize_missing_columns() {
        let row: TodoRow = serde_json::from_value(json!({ "id": "a1b2" })).unwrap();
        let todo = normalize(row);
        assert_eq!(todo.id, "a1b2");
        assert_eq!(todo.task, "");
        assert!(!todo.is_complete);
    }
}
