use axum::{Router, routing::get};
use std::sync::Arc;

use super::{
    handlers::{index_page, track_mobile},
    middleware::with_request_tracing,
};
use crate::ports::services::LookupService;

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub lookup_service: Arc<dyn LookupService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Presentation
        .route("/", get(index_page))
        // Lookup
        .route("/track", get(track_mobile))
        .with_state(state);

    with_request_tracing(router)
}
