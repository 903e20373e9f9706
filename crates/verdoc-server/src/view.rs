//! View layer contract.
//!
//! The controller produces a [`RenderModel`]; a [`DocsView`] turns it into a
//! response body. [`JsonView`] serves the model as JSON for a frontend that
//! does its own templating.

use serde::Serialize;
use verdoc_docs::DocVersions;

/// Everything a view needs to render one documentation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    /// Text of the page's first `<h1>`.
    pub title: Option<String>,
    /// Rendered navigation index of the current version.
    pub index: String,
    /// Rendered page HTML.
    pub content: String,
    /// Version the page was requested for.
    pub current_version: String,
    /// All published versions, in display order.
    pub versions: DocVersions,
    /// `""` for the version root, `"/slug"` for an explicit page.
    pub current_section: String,
    /// Same page under the default version, if it exists there.
    pub canonical: Option<String>,
}

/// Error returned by a view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// View-specific failure (e.g., a template error).
    #[error("View error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Renders a [`RenderModel`] into a response body.
pub trait DocsView: Send + Sync {
    /// `Content-Type` of the rendered body.
    fn content_type(&self) -> &'static str;

    /// Render the model.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if rendering fails.
    fn render(&self, model: &RenderModel) -> Result<String, ViewError>;
}

/// View that serializes the model as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonView;

impl DocsView for JsonView {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, model: &RenderModel) -> Result<String, ViewError> {
        Ok(serde_json::to_string(model)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn model() -> RenderModel {
        RenderModel {
            title: Some("Installation".to_owned()),
            index: "<ul></ul>".to_owned(),
            content: "<h1>Installation</h1>".to_owned(),
            current_version: "5.8".to_owned(),
            versions: [("master", "Master"), ("5.8", "5.8")].into_iter().collect(),
            current_section: String::new(),
            canonical: Some("/docs/master/installation".to_owned()),
        }
    }

    #[test]
    fn test_json_view_field_names() {
        let body = JsonView.render(&model()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["title"], "Installation");
        assert_eq!(json["currentVersion"], "5.8");
        assert_eq!(json["currentSection"], "");
        assert_eq!(json["canonical"], "/docs/master/installation");
        assert_eq!(json["versions"][0]["id"], "master");
        assert_eq!(json["versions"][1]["label"], "5.8");
    }

    #[test]
    fn test_json_view_absent_values_are_null() {
        let mut model = model();
        model.title = None;
        model.canonical = None;

        let body = JsonView.render(&model).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert!(json["title"].is_null());
        assert!(json["canonical"].is_null());
    }

    #[test]
    fn test_json_view_content_type() {
        assert_eq!(JsonView.content_type(), "application/json");
    }
}
