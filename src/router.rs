use axum::{
    Router,
    routing::get,
};

use crate::db::ResponseStore;
use crate::handlers::{clear_handler, download_handler, index_handler, submit_handler};

/// Shared handler state. The store handle is injected here at startup and
/// cloned per request; there is no process-global database state.
#[derive(Clone)]
pub struct AppState {
    pub store: ResponseStore,
}

impl AppState {
    pub fn new(store: ResponseStore) -> Self {
        Self { store }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/download", get(download_handler))
        .route("/clear", get(clear_handler))
        .with_state(state)
}
