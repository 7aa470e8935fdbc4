#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use noteful_api::config::{LogFormat, ServerConfig};
use noteful_api::router::build_app_router;
use noteful_api::state::AppState;
use noteful_core::types::DbId;
use noteful_db::models::note::{CreateNote, Note, UpdateNote};
use noteful_db::{MemoryNoteStore, NoteStore, StoreResult};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router around the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn NoteStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Fresh in-memory store, shared between the app and test assertions.
pub fn memory_store() -> Arc<MemoryNoteStore> {
    Arc::new(MemoryNoteStore::new())
}

/// A store whose every operation fails like a dropped connection.
pub struct FailingStore;

#[async_trait]
impl NoteStore for FailingStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Note>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn fetch_by_id(&self, _id: DbId) -> StoreResult<Option<Note>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert(&self, _input: &CreateNote) -> StoreResult<Note> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _id: DbId, _input: &UpdateNote) -> StoreResult<()> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: DbId) -> StoreResult<u64> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send `method` with an empty body and no `Content-Type`.
pub async fn send_without_body(app: Router, method: Method, uri: &str) -> Response<Body> {
    send(app, method, uri, None).await
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
