use std::sync::Arc;

use noteful_db::NoteStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Notes store chosen at startup (PostgreSQL or in-memory).
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}
