//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and `{ "error": { "message": ... } }` body. They do NOT need
//! an HTTP server -- they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use noteful_api::error::AppError;
use noteful_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with a fixed message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Note",
        id: "42".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "Note Not Found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::MissingField maps to 400 naming the field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_field_error_returns_400() {
    let err = AppError::Core(CoreError::MissingField("content"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Missing 'content' request in body");
}

// ---------------------------------------------------------------------------
// Test: CoreError::EmptyUpdate maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_update_error_returns_400() {
    let (status, json) = error_to_response(AppError::Core(CoreError::EmptyUpdate)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "Request body must contain either 'note_name', 'content' or 'folder_id'"
    );
}

// ---------------------------------------------------------------------------
// Test: store errors map to 500 and hide the driver message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "secret connection string leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("secret"),
        "Store error response must not leak driver details"
    );
    assert_eq!(json["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_from_store_is_still_a_500() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
