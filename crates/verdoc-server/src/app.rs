//! Router construction.
//!
//! Builds the axum router with the documentation routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controller::DOCS_PREFIX;
use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(DOCS_PREFIX, get(handlers::docs::show_root))
        .route(
            &format!("{DOCS_PREFIX}/{{version}}"),
            get(handlers::docs::show_version),
        )
        .route(
            &format!("{DOCS_PREFIX}/{{version}}/{{page}}"),
            get(handlers::docs::show_page),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
