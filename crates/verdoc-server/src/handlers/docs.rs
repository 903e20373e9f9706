//! Documentation page endpoints.
//!
//! Delegates to [`DocsController`](crate::DocsController) and turns its
//! outcome into a redirect or a rendered, cacheable response.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

use crate::controller::{PageOutcome, Redirect};
use crate::error::ServerError;
use crate::state::AppState;
use crate::view::RenderModel;

/// Handle GET /docs.
pub(crate) async fn show_root(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.show_root()
}

/// Handle GET /docs/{version}.
pub(crate) async fn show_version(
    Path(version): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    show_page_impl(&state, &version, None, &headers)
}

/// Handle GET /docs/{version}/{page}.
pub(crate) async fn show_page(
    Path((version, page)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    show_page_impl(&state, &version, Some(&page), &headers)
}

/// Shared implementation for page requests.
fn show_page_impl(
    state: &AppState,
    version: &str,
    page: Option<&str>,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    match state.controller.show_page(version, page)? {
        PageOutcome::Redirect(redirect) => Ok(redirect.into_response()),
        PageOutcome::Render(model) => render(state, &model, headers),
    }
}

/// Render the model through the view, honoring `If-None-Match`.
fn render(
    state: &AppState,
    model: &RenderModel,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let body = state.view.render(model)?;
    let etag = compute_etag(&state.version, &body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, state.view.content_type().to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        body,
    )
        .into_response())
}

/// Compute `ETag` from application version and rendered body.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, body: &str) -> String {
    let hash = Md5::digest(format!("{version}:{body}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "body"), compute_etag("1.0.1", "body"));
    }

    #[test]
    fn test_compute_etag_includes_body() {
        assert_ne!(compute_etag("1.0.0", "body1"), compute_etag("1.0.0", "body2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "body");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }
}
