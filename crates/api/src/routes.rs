use crate::handlers;
use crate::middleware::log_request;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Creates all routes with state.
///
/// Unmatched paths fall through to the dashboard, and every request passes
/// through the request logger.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/service/ip", get(handlers::lookup_domain))
        .route("/", get(handlers::dashboard))
        .fallback(handlers::dashboard)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
