use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is up but the notes store did not answer a ping.
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub store_healthy: bool,
}

impl HealthResponse {
    fn from_ping(store_healthy: bool) -> Self {
        let status = if store_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store_healthy,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ping = state.store.ping().await;
    if let Err(err) = &ping {
        tracing::warn!(error = %err, "Notes store ping failed");
    }
    Json(HealthResponse::from_ping(ping.is_ok()))
}

/// `/health`, merged at the root beside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
