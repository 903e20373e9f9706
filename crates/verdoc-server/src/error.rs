//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use verdoc_docs::DocsError;

use crate::view::ViewError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No content for a published version and page.
    #[error("Page not found: {version}/{page}")]
    PageNotFound {
        /// Requested version.
        version: String,
        /// Effective page slug.
        page: String,
    },

    /// Documentation backend failure.
    #[error("{0}")]
    Docs(#[from] DocsError),

    /// View failure.
    #[error("{0}")]
    View(#[from] ViewError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound { version, page } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "version": version, "page": page}),
            ),
            Self::Docs(e) => {
                tracing::error!(error = %e, "Documentation backend failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::View(e) => {
                tracing::error!(error = %e, "View rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
