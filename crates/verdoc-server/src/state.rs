//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use crate::controller::DocsController;
use crate::view::DocsView;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page request resolution.
    pub(crate) controller: DocsController,
    /// View rendering the resolved pages.
    pub(crate) view: Arc<dyn DocsView>,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}
