//! In-memory documentation backend.
//!
//! Provides [`MemoryDocumentation`] for serving pre-rendered pages and for
//! testing the request handlers without a real backend.

use std::collections::HashMap;

use crate::documentation::{Documentation, DocsError};
use crate::versions::DocVersions;

/// Documentation backend holding pre-rendered HTML in memory.
///
/// Use the builder methods to register versions, pages and indexes.
///
/// # Example
///
/// ```ignore
/// use verdoc_docs::MemoryDocumentation;
///
/// let docs = MemoryDocumentation::new()
///     .with_version("master", "Master")
///     .with_version("5.8", "5.8")
///     .with_index("5.8", "<ul><li>Installation</li></ul>")
///     .with_page("5.8", "installation", "<h1>Installation</h1>");
/// ```
#[derive(Debug, Default)]
pub struct MemoryDocumentation {
    versions: DocVersions,
    pages: HashMap<(String, String), String>,
    indexes: HashMap<String, String>,
}

impl MemoryDocumentation {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a version with a display label.
    #[must_use]
    pub fn with_version(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.versions.insert(id, label);
        self
    }

    /// Add a rendered page.
    ///
    /// Pages may be added for versions that are not published; they exist for
    /// [`Documentation::section_exists`] but the server never routes to them.
    #[must_use]
    pub fn with_page(
        mut self,
        version: impl Into<String>,
        page: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        self.pages
            .insert((version.into(), page.into()), html.into());
        self
    }

    /// Set the rendered navigation index of a version.
    #[must_use]
    pub fn with_index(mut self, version: impl Into<String>, html: impl Into<String>) -> Self {
        self.indexes.insert(version.into(), html.into());
        self
    }

    fn lookup(&self, version: &str, page: &str) -> Option<&String> {
        self.pages.get(&(version.to_owned(), page.to_owned()))
    }
}

impl Documentation for MemoryDocumentation {
    fn versions(&self) -> DocVersions {
        self.versions.clone()
    }

    fn page(&self, version: &str, page: &str) -> Result<Option<String>, DocsError> {
        let html = self.lookup(version, page).cloned();
        if html.is_none() {
            tracing::trace!(version, page, "Page not in memory");
        }
        Ok(html)
    }

    fn index(&self, version: &str) -> Result<String, DocsError> {
        if let Some(index) = self.indexes.get(version) {
            return Ok(index.clone());
        }
        if self.versions.contains(version) {
            return Ok(String::new());
        }
        Err(DocsError::UnknownVersion(version.to_owned()))
    }

    fn section_exists(&self, version: &str, page: &str) -> bool {
        self.lookup(version, page).is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> MemoryDocumentation {
        MemoryDocumentation::new()
            .with_version("master", "Master")
            .with_version("5.8", "5.8")
            .with_index("5.8", "<ul><li>Installation</li></ul>")
            .with_page("5.8", "installation", "<h1>Installation</h1>")
            .with_page("master", "installation", "<h1>Installation</h1>")
            .with_page("master", "queues", "<h1>Queues</h1>")
    }

    #[test]
    fn test_versions_in_registration_order() {
        let docs = sample();

        let ids: Vec<String> = docs.versions().ids().map(str::to_owned).collect();

        assert_eq!(ids, vec!["master".to_owned(), "5.8".to_owned()]);
    }

    #[test]
    fn test_page_found() {
        let docs = sample();

        let html = docs.page("5.8", "installation").unwrap();

        assert_eq!(html.as_deref(), Some("<h1>Installation</h1>"));
    }

    #[test]
    fn test_page_missing_is_none() {
        let docs = sample();

        assert!(docs.page("5.8", "queues").unwrap().is_none());
        assert!(docs.page("4.2", "installation").unwrap().is_none());
    }

    #[test]
    fn test_section_exists_is_per_version() {
        let docs = sample();

        assert!(docs.section_exists("master", "queues"));
        assert!(!docs.section_exists("5.8", "queues"));
    }

    #[test]
    fn test_index_registered() {
        let docs = sample();

        assert_eq!(docs.index("5.8").unwrap(), "<ul><li>Installation</li></ul>");
    }

    #[test]
    fn test_index_known_version_without_index_is_empty() {
        let docs = sample();

        assert_eq!(docs.index("master").unwrap(), "");
    }

    #[test]
    fn test_index_unknown_version_errors() {
        let docs = sample();

        let err = docs.index("4.2").unwrap_err();

        assert!(matches!(err, DocsError::UnknownVersion(v) if v == "4.2"));
    }
}
