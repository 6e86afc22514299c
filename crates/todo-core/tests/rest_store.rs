//! REST store tests against a mock PostgREST server

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::json;
use todo_core::{
    LoadOutcome, MutationOutcome, RestTodoStore, StoreConfig, StoreError, TodoController,
    TodoState, TodoStore,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "anon-key";
const TABLE_PATH: &str = "/rest/v1/todos";

fn store_for(server: &MockServer) -> RestTodoStore {
    let config = StoreConfig::from_parts(Some(&server.uri()), Some(KEY)).expect("config");
    RestTodoStore::new(config)
}

#[tokio::test]
async fn test_select_recent_query_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("select", "id,task,is_complete,inserted_at"))
        .and(query_param("order", "inserted_at.desc"))
        .and(query_param("limit", "25"))
        .and(header("apikey", KEY))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "task": "Newer", "is_complete": null, "inserted_at": "2024-01-02T00:00:00+00:00" },
            { "id": 1, "task": null, "is_complete": true, "inserted_at": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = store_for(&server).select_recent(25).await;

    assert_eq!(response.status, 200);
    assert!(response.error.is_none());
    assert_eq!(response.row_count(), 2);
    let rows = response.data.unwrap();
    assert_eq!(rows[0].id, json!(2));
    assert_eq!(rows[1].task, None);
}

#[tokio::test]
async fn test_select_error_body_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "details": null,
            "hint": null,
            "message": "relation \"public.todos\" does not exist"
        })))
        .mount(&server)
        .await;

    let response = store_for(&server).select_recent(25).await;

    assert_eq!(response.status, 404);
    assert!(response.data.is_none());
    assert_eq!(
        response.error,
        Some(StoreError::Api {
            status: 404,
            message: "relation \"public.todos\" does not exist".to_string(),
            code: Some("42P01".to_string()),
        })
    );
}

#[tokio::test]
async fn test_select_unreachable_store_has_no_status() {
    let config = StoreConfig::from_parts(Some("http://127.0.0.1:9"), Some(KEY)).unwrap();
    let response = RestTodoStore::new(config).select_recent(25).await;

    assert_eq!(response.status, 0);
    assert!(matches!(response.error, Some(StoreError::Transport(_))));
}

#[tokio::test]
async fn test_insert_reads_back_single_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(query_param("select", "id,task,is_complete,inserted_at"))
        .and(header("prefer", "return=representation"))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .and(body_json(json!({ "task": "Buy milk" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 10, "task": "Buy milk", "is_complete": false, "inserted_at": "2024-03-01T09:00:00+00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let row = store_for(&server).insert("Buy milk").await.unwrap().unwrap();
    assert_eq!(row.id, json!(10));
    assert_eq!(row.task.as_deref(), Some("Buy milk"));
}

#[tokio::test]
async fn test_set_complete_filters_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(TABLE_PATH))
        .and(query_param("id", "eq.5"))
        .and(body_json(json!({ "is_complete": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "task": "Ship it", "is_complete": true, "inserted_at": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let row = store_for(&server).set_complete("5", true).await.unwrap().unwrap();
    assert_eq!(row.is_complete, Some(true));
}

#[tokio::test]
async fn test_set_complete_no_rows_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server).set_complete("404", true).await.unwrap_err();
    assert_eq!(err.to_string(), "JSON object requested, multiple (or no) rows returned");
    assert_eq!(err.status(), 406);
}

#[tokio::test]
async fn test_delete_filters_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .and(query_param("id", "eq.5"))
        .and(header("apikey", KEY))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server).delete("5").await.unwrap();
}

#[tokio::test]
async fn test_error_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = store_for(&server).delete("5").await.unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized");
}

#[tokio::test]
async fn test_controller_over_rest_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "task": "Existing", "is_complete": false, "inserted_at": "2024-01-01T00:00:00+00:00" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 2, "task": "Buy milk", "is_complete": null, "inserted_at": "2024-01-02T00:00:00+00:00"
        })))
        .mount(&server)
        .await;

    let state = Rc::new(RefCell::new(TodoState::new()));
    let controller = TodoController::new(Some(Arc::new(store_for(&server))), state.clone());

    assert_eq!(controller.load().await, LoadOutcome::Ready(1));
    controller.set_draft("Buy milk");
    assert_eq!(controller.create().await, MutationOutcome::Applied);

    let state = state.borrow();
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.todos[0].id, "2");
    assert!(!state.todos[0].is_complete);
    assert!(state.draft.is_empty());
}
