//! HTTP controller for versioned documentation sites.
//!
//! Serves documentation pages under `/docs`, resolving each request against a
//! [`Documentation`] backend and handing the result to a [`DocsView`]:
//!
//! - `GET /docs` redirects to the default version
//! - `GET /docs/{version}` renders the default page of a version
//! - `GET /docs/{version}/{page}` renders a page
//!
//! Unknown versions are treated as page slugs under the default version
//! (301), unknown sections redirect to the version root (302), and missing
//! content is a 404.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use verdoc_docs::MemoryDocumentation;
//! use verdoc_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let docs = MemoryDocumentation::new()
//!         .with_version("5.8", "5.8")
//!         .with_page("5.8", "installation", "<h1>Installation</h1>");
//!     let config = ServerConfig {
//!         default_version: "5.8".to_string(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config, Arc::new(docs)).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (verdoc-server)
//!                        │
//!                        ├─► DocsController ──► Documentation (backend)
//!                        │        │
//!                        │        └─► extract_title (quick-xml)
//!                        │
//!                        └─► DocsView ──► response body (JSON by default)
//! ```

mod app;
mod controller;
mod error;
mod handlers;
mod middleware;
mod state;
mod title;
mod view;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use state::AppState;
use verdoc_docs::Documentation;

pub use controller::{DOCS_PREFIX, DocsController, PageOutcome, Redirect};
pub use error::ServerError;
pub use title::extract_title;
pub use view::{DocsView, JsonView, RenderModel, ViewError};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Version served by `/docs` and used for canonical URLs.
    pub default_version: String,
    /// Page served when a request names a version but no page.
    pub default_page: String,
    /// Application version (for `ETag` computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            default_version: "master".to_owned(),
            default_page: "installation".to_owned(),
            version: String::new(),
        }
    }
}

/// Build the documentation router without binding a socket.
///
/// Use this to mount the documentation routes into a larger application or
/// to drive them in tests.
///
/// # Arguments
///
/// * `config` - Server configuration (host and port are ignored)
/// * `docs` - Documentation backend
/// * `view` - View rendering resolved pages
#[must_use]
pub fn router(
    config: &ServerConfig,
    docs: Arc<dyn Documentation>,
    view: Arc<dyn DocsView>,
) -> Router {
    if !docs.versions().contains(&config.default_version) {
        tracing::warn!(
            default_version = %config.default_version,
            "Default version is not published by the documentation backend"
        );
    }

    let state = Arc::new(AppState {
        controller: DocsController::new(
            docs,
            config.default_version.clone(),
            config.default_page.clone(),
        ),
        view,
        version: config.version.clone(),
    });

    app::create_router(state)
}

/// Run the server with the JSON view.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `docs` - Documentation backend
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    docs: Arc<dyn Documentation>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(&config, docs, Arc::new(JsonView));

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        default_version = %config.default_version,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from verdoc config.
///
/// # Arguments
///
/// * `config` - verdoc configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &verdoc_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        default_version: config.docs.default_version.clone(),
        default_page: config.docs.default_page.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = verdoc_config::Config::default();
        config.server.port = 8088;
        config.docs.default_version = "5.8".to_owned();

        let server_config = server_config_from_config(&config, "0.1.0".to_owned());

        assert_eq!(server_config.host, "127.0.0.1");
        assert_eq!(server_config.port, 8088);
        assert_eq!(server_config.default_version, "5.8");
        assert_eq!(server_config.default_page, "installation");
        assert_eq!(server_config.version, "0.1.0");
    }
}
