//! Drawable documents
//!
//! A document describes an app window and its drawable tree, the way the
//! display service would receive it. Documents are TOML or JSON:
//!
//! ```toml
//! [app]
//! title = "Buttons"
//! width = 300
//! height = 450
//!
//! [[root.children]]
//! type = "Stack"
//! name = "sidebar"
//! width = 100
//! height = "100%"
//!
//! [[root.children.children]]
//! type = "Button"
//! text = "OK"
//! ```
//!
//! Every key of a drawable other than `type`, `name`, `native_size` and
//! `children` is a style property.

pub mod drawable;
pub mod metrics;

pub use drawable::{Drawable, DrawableKind, Invalidation};
pub use metrics::NativeMetrics;

use std::path::Path;

use serde::Deserialize;

use crate::error::DocumentError;
use crate::layout::{
    calculate_layout_with_config, LayoutConfig, LayoutContext, LayoutError, LayoutResult,
    Properties, PropertyValue,
};

/// App window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: None,
            width: 600,
            height: 500,
        }
    }
}

/// An app window and the drawables in it
#[derive(Debug, Clone)]
pub struct Document {
    pub app: AppSettings,
    pub root: Drawable,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    root: RawRoot,
}

#[derive(Deserialize, Default)]
struct RawRoot {
    name: Option<String>,
    #[serde(default)]
    children: Vec<Drawable>,
    #[serde(flatten)]
    properties: Properties,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        let mut root = Drawable::document_root().with_children(raw.root.children);
        if let Some(name) = raw.root.name {
            root = root.named(name);
        }
        for (key, value) in raw.root.properties {
            root.set_property(key, value);
        }
        Document::new(raw.app, root)
    }
}

impl Document {
    pub fn new(app: AppSettings, root: Drawable) -> Self {
        Self { app, root }
    }

    /// Load a document from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = toml::from_str(content)?;
        Ok(raw.into())
    }

    /// Load a document from JSON
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Ok(raw.into())
    }

    /// Load a document from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = match extension.as_str() {
            "toml" | "json" => std::fs::read_to_string(path)?,
            _ => return Err(DocumentError::unsupported(extension)),
        };
        tracing::debug!(path = %path.display(), "loading document");
        if extension == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Use `metrics` for the size estimates of every drawable
    pub fn with_metrics(mut self, metrics: NativeMetrics) -> Self {
        self.root.set_metrics(&metrics);
        self
    }

    pub fn metrics(&self) -> &NativeMetrics {
        self.root.metrics()
    }

    /// The root layout context for the app window
    pub fn viewport(&self) -> LayoutContext {
        LayoutContext::viewport(self.app.width as f64, self.app.height as f64)
    }

    /// Run a layout pass for the app window
    pub fn layout(&self, config: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
        calculate_layout_with_config(&self.root, &self.viewport(), config)
    }

    /// Update a style on the named drawable.
    ///
    /// Returns `None` if there is no drawable with that name.
    pub fn update(
        &mut self,
        name: &str,
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> Option<Invalidation> {
        let drawable = self.root.find_mut(name)?;
        Some(drawable.set_property(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let doc = Document::from_toml_str("").unwrap();
        assert_eq!(doc.app, AppSettings::default());
        assert_eq!(doc.root.kind(), DrawableKind::DocumentRoot);
        assert!(doc.root.children().is_empty());
    }

    #[test]
    fn test_toml_children_and_properties() {
        let doc = Document::from_toml_str(
            r#"
            [app]
            width = 300
            height = 450

            [[root.children]]
            type = "Stack"
            name = "sidebar"
            width = 100
            height = "100%"

            [[root.children.children]]
            type = "Button"
            text = "OK"
            native_size = [75, 50]
            "#,
        )
        .unwrap();

        assert_eq!(doc.app.width, 300);
        let sidebar = doc.root.find("sidebar").unwrap();
        assert_eq!(sidebar.kind(), DrawableKind::Stack);
        assert_eq!(sidebar.property("width"), Some(&PropertyValue::Int(100)));
        assert_eq!(sidebar.children()[0].property("text"), Some(&PropertyValue::from("OK")));
        assert!(sidebar.children()[0].property("native_size").is_none());
    }

    #[test]
    fn test_json_null_is_dropped() {
        let doc = Document::from_json_str(
            r#"{"root": {"children": [{"type": "Para", "text": "hi", "width": null}]}}"#,
        )
        .unwrap();
        assert!(doc.root.children()[0].property("width").is_none());
    }

    #[test]
    fn test_root_properties_override_defaults() {
        let doc = Document::from_toml_str("[root]\nwidth = 200\nname = \"main\"").unwrap();
        assert_eq!(doc.root.property("width"), Some(&PropertyValue::Int(200)));
        assert_eq!(doc.root.property("height"), Some(&PropertyValue::from("100%")));
        assert_eq!(doc.root.name(), Some("main"));
    }

    #[test]
    fn test_unknown_type_is_a_decode_error() {
        let err = Document::from_toml_str("[[root.children]]\ntype = \"Spinner\"").unwrap_err();
        assert!(matches!(err, DocumentError::Toml(_)));
        assert!(err.to_string().contains("Spinner"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Document::from_file(Path::new("app.yaml")).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat { ref extension } if extension == "yaml"));
    }

    #[test]
    fn test_update_changes_text_size() {
        let para = Drawable::new(DrawableKind::Para)
            .named("p")
            .with_property("text", "ab");
        let mut doc = Document::new(AppSettings::default(), Drawable::document_root().with_child(para));
        let before = doc.layout(&LayoutConfig::default()).unwrap();
        assert_eq!(before.children[0].width, 12.0);

        assert_eq!(doc.update("p", "text", "abcd"), Some(Invalidation::Relayout));
        let after = doc.layout(&LayoutConfig::default()).unwrap();
        assert_eq!(after.children[0].width, 24.0);

        assert_eq!(doc.update("nobody", "text", "x"), None);
    }

    #[test]
    fn test_direct_edit_through_find_mut_relayouts() {
        let mut doc = Document::from_toml_str(
            "[[root.children]]\ntype = \"Para\"\nname = \"p\"\ntext = \"ab\"",
        )
        .unwrap();
        doc.root.find_mut("p").unwrap().set_property("text", "abc");

        let result = doc.layout(&LayoutConfig::default()).unwrap();
        assert_eq!(result.children[0].width, 18.0);
    }

    #[test]
    fn test_with_metrics_changes_estimates() {
        let doc = Document::from_toml_str("[[root.children]]\ntype = \"Check\"")
            .unwrap()
            .with_metrics(NativeMetrics {
                toggle_size: 16.0,
                ..NativeMetrics::default()
            });
        assert_eq!(doc.metrics().toggle_size, 16.0);

        let result = doc.layout(&LayoutConfig::default()).unwrap();
        assert_eq!((result.children[0].width, result.children[0].height), (16.0, 16.0));
    }
}
