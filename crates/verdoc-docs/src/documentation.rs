//! Documentation gateway trait and error type.

use crate::versions::DocVersions;

/// Error returned by a documentation backend.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The version is not published by this backend.
    #[error("Unknown documentation version: {0}")]
    UnknownVersion(String),

    /// Backend-specific failure (I/O, remote service, rendering).
    #[error("Documentation backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl DocsError {
    /// Wrap a backend-specific error.
    #[must_use]
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(source))
    }
}

/// Source of rendered documentation for every published version.
///
/// Versions and pages are opaque identifiers: `"5.8"`, `"installation"`.
/// Implementations decide how pages are stored and rendered; callers only see
/// HTML strings.
pub trait Documentation: Send + Sync {
    /// Published versions in display order.
    ///
    /// Called on every request, so implementations that load versions from
    /// a slow source should cache them.
    fn versions(&self) -> DocVersions;

    /// Rendered HTML of `page` in `version`.
    ///
    /// Returns `Ok(None)` if the page does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError`] if the backend fails to load or render the page.
    fn page(&self, version: &str, page: &str) -> Result<Option<String>, DocsError>;

    /// Rendered navigation index of `version`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::UnknownVersion`] if the version has no index, or
    /// [`DocsError::Backend`] if loading fails.
    fn index(&self, version: &str) -> Result<String, DocsError>;

    /// Check if `page` exists in `version`.
    ///
    /// Returns `false` on backend errors.
    fn section_exists(&self, version: &str, page: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_version_display() {
        let err = DocsError::UnknownVersion("4.2".to_owned());
        assert_eq!(err.to_string(), "Unknown documentation version: 4.2");
    }

    #[test]
    fn test_backend_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DocsError::backend(io);

        assert!(matches!(err, DocsError::Backend(_)));
        assert_eq!(err.to_string(), "Documentation backend error: denied");
    }
}
