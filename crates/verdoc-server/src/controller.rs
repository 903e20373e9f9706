//! Documentation page controller.
//!
//! Resolves `(version, page)` requests against a [`Documentation`] backend
//! into either a redirect or a [`RenderModel`] for the view.
//!
//! Resolution order for `show_page`:
//!
//! 1. Unknown version: permanent redirect that treats the segment as a page
//!    under the default version (`/docs/queues` -> `/docs/{default}/queues`).
//! 2. No content for the effective page: [`ServerError::PageNotFound`].
//! 3. Explicit page that is not a section of the version: redirect to the
//!    version root.
//! 4. Otherwise: render.

use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use verdoc_docs::Documentation;

use crate::error::ServerError;
use crate::title::extract_title;
use crate::view::RenderModel;

/// URL prefix of all documentation routes.
pub const DOCS_PREFIX: &str = "/docs";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build a documentation URL from path segments, e.g. `/docs/5.8/queues`.
pub(crate) fn docs_url(segments: &[&str]) -> String {
    let mut url = DOCS_PREFIX.to_owned();
    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    url
}

/// Redirect response with an explicit status code.
///
/// axum's own `Redirect` only offers 303/307/308; the docs routes need
/// 301 and 302.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    status: StatusCode,
    location: String,
}

impl Redirect {
    /// 302 Found.
    #[must_use]
    pub fn found(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FOUND,
            location: location.into(),
        }
    }

    /// 301 Moved Permanently.
    #[must_use]
    pub fn moved_permanently(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::MOVED_PERMANENTLY,
            location: location.into(),
        }
    }

    /// Response status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Redirect target.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        (self.status, [(header::LOCATION, self.location)]).into_response()
    }
}

/// Result of resolving a page request.
#[derive(Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Send the client elsewhere.
    Redirect(Redirect),
    /// Render the page.
    Render(Box<RenderModel>),
}

/// Resolves documentation requests for one site.
///
/// Holds no per-request state: the requested version travels in the
/// returned [`RenderModel`].
pub struct DocsController {
    docs: Arc<dyn Documentation>,
    default_version: String,
    default_page: String,
}

impl DocsController {
    /// Create a controller.
    ///
    /// # Arguments
    ///
    /// * `docs` - Documentation backend
    /// * `default_version` - Version served by `/docs` and used for canonical URLs
    /// * `default_page` - Page served when a request names no page
    #[must_use]
    pub fn new(
        docs: Arc<dyn Documentation>,
        default_version: impl Into<String>,
        default_page: impl Into<String>,
    ) -> Self {
        Self {
            docs,
            default_version: default_version.into(),
            default_page: default_page.into(),
        }
    }

    /// The default version.
    #[must_use]
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Handle `GET /docs`.
    #[must_use]
    pub fn show_root(&self) -> Redirect {
        Redirect::found(docs_url(&[&self.default_version]))
    }

    /// Handle `GET /docs/{version}` (`page` is `None`) and
    /// `GET /docs/{version}/{page}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::PageNotFound`] if the backend has no content for
    /// the page, or [`ServerError::Docs`] if the backend fails.
    pub fn show_page(
        &self,
        version: &str,
        page: Option<&str>,
    ) -> Result<PageOutcome, ServerError> {
        let page = page.filter(|p| !p.is_empty());

        if !self.is_valid_version(version) {
            let redirect =
                Redirect::moved_permanently(docs_url(&[&self.default_version, version]));
            tracing::debug!(
                version,
                location = redirect.location(),
                "Unknown version, redirecting"
            );
            return Ok(PageOutcome::Redirect(redirect));
        }

        let effective_page = self.effective_page(page);
        let Some(content) = self.docs.page(version, effective_page)? else {
            return Err(ServerError::PageNotFound {
                version: version.to_owned(),
                page: effective_page.to_owned(),
            });
        };

        let title = extract_title(&content);
        let index = self.docs.index(version)?;

        let current_section = match self.resolve_section(version, page) {
            Ok(section) => section,
            Err(redirect) => {
                tracing::debug!(
                    version,
                    page,
                    location = redirect.location(),
                    "Unknown section, redirecting"
                );
                return Ok(PageOutcome::Redirect(redirect));
            }
        };

        let canonical = self.resolve_canonical(effective_page);

        tracing::debug!(version, page = effective_page, "Rendering page");
        Ok(PageOutcome::Render(Box::new(RenderModel {
            title,
            index,
            content,
            current_version: version.to_owned(),
            versions: self.docs.versions(),
            current_section,
            canonical,
        })))
    }

    /// Check if `version` is currently published.
    #[must_use]
    pub fn is_valid_version(&self, version: &str) -> bool {
        self.docs.versions().contains(version)
    }

    /// Navigation marker for `page` in `version`.
    ///
    /// Returns `""` when no page was requested and `"/page"` when the page is
    /// a section of the version.
    ///
    /// # Errors
    ///
    /// Returns a 302 redirect to the version root if an explicitly requested
    /// page is not a section of the version.
    pub fn resolve_section(&self, version: &str, page: Option<&str>) -> Result<String, Redirect> {
        match page {
            None => Ok(String::new()),
            Some(page) if self.docs.section_exists(version, page) => Ok(format!("/{page}")),
            Some(_) => Err(Redirect::found(docs_url(&[version]))),
        }
    }

    /// Canonical URL of `page`: the same page under the default version.
    ///
    /// Returns `None` if the default version has no such section.
    #[must_use]
    pub fn resolve_canonical(&self, page: &str) -> Option<String> {
        self.docs
            .section_exists(&self.default_version, page)
            .then(|| docs_url(&[&self.default_version, page]))
    }

    fn effective_page<'a>(&'a self, page: Option<&'a str>) -> &'a str {
        page.unwrap_or(&self.default_page)
    }
}
