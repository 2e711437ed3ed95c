//! Shoes Layout - positioning for retained-mode drawable trees
//!
//! This library computes the position and size of every drawable in an app
//! window. Containers either stack their children vertically or flow them
//! left to right with wrapping; leaf widgets report their own minimum size.
//!
//! # Example
//!
//! ```rust
//! use shoes_layout::{calculate_layout, Drawable, DrawableKind, LayoutContext};
//!
//! let root = Drawable::new(DrawableKind::Stack)
//!     .with_property("width", "100%")
//!     .with_property("height", "100%")
//!     .with_child(Drawable::new(DrawableKind::Button).with_native_size(75.0, 50.0));
//!
//! let result = calculate_layout(&root, &LayoutContext::viewport(300.0, 450.0)).unwrap();
//! assert_eq!(result.width, 300.0);
//! assert_eq!(result.children[0].height, 50.0);
//! ```

pub mod document;
pub mod error;
pub mod layout;
pub mod renderer;

pub use document::{AppSettings, Document, Drawable, DrawableKind, Invalidation, NativeMetrics};
pub use error::DocumentError;
pub use layout::{
    calculate_layout, calculate_layout_with_config, LayoutConfig, LayoutContext, LayoutError,
    LayoutResult, Policy, Positionable, PropertyValue,
};
pub use renderer::{render_svg, render_tree, SvgConfig};

use thiserror::Error;

/// Errors that can occur in the load-layout-render pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Error reading or decoding a document
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error writing JSON output
    #[error("failed to write layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for a rendered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Tree,
    Svg,
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Output format
    pub format: OutputFormat,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Lay out a TOML document in its app window
pub fn layout_document(source: &str, config: &LayoutConfig) -> Result<LayoutResult, Error> {
    let doc = Document::from_toml_str(source)?;
    Ok(doc.layout(config)?)
}

/// Lay out a document and render the result in the configured format
///
/// # Example
///
/// ```rust
/// use shoes_layout::{render, OutputFormat, RenderConfig};
///
/// let doc = shoes_layout::Document::from_toml_str(r#"
///     [app]
///     width = 200
///     height = 100
///
///     [[root.children]]
///     type = "Button"
///     name = "ok"
///     native_size = [50, 20]
/// "#).unwrap();
///
/// let svg = render(&doc, &RenderConfig::new().with_format(OutputFormat::Svg)).unwrap();
/// assert!(svg.contains(r#"id="ok""#));
/// ```
pub fn render(doc: &Document, config: &RenderConfig) -> Result<String, Error> {
    let result = doc.layout(&config.layout)?;
    render_result(&result, config)
}

/// Render an existing layout result in the configured format
pub fn render_result(result: &LayoutResult, config: &RenderConfig) -> Result<String, Error> {
    Ok(match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Tree => render_tree(result),
        OutputFormat::Svg => render_svg(result, &config.svg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_document_fills_window() {
        let result = layout_document(
            "[app]\nwidth = 300\nheight = 450",
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!((result.width, result.height), (300.0, 450.0));
        assert_eq!(result.policy, Policy::Flowed);
    }

    #[test]
    fn test_layout_error_is_wrapped() {
        let err = layout_document(
            "[[root.children]]\ntype = \"Stack\"\nwidth = true",
            &LayoutConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Layout(LayoutError::MalformedValue { .. })));
        assert!(err.to_string().starts_with("layout error:"));
    }

    #[test]
    fn test_document_error_is_wrapped() {
        let err = layout_document("[app]\nwidth = \"wide\"", &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Document(DocumentError::Toml(_))));
    }

    #[test]
    fn test_render_json() {
        let doc = Document::from_toml_str("[app]\nwidth = 10\nheight = 20").unwrap();
        let json = render(&doc, &RenderConfig::new().with_format(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["policy"], "flowed");
        assert_eq!(value["width"], 10.0);
        assert_eq!(value["placement"], "in_flow");
    }

    #[test]
    fn test_render_result_reuses_one_layout() {
        let doc = Document::from_toml_str("[app]\nwidth = 10\nheight = 20").unwrap();
        let result = doc.layout(&LayoutConfig::default()).unwrap();
        let config = RenderConfig::new();
        assert_eq!(render_result(&result, &config).unwrap(), render(&doc, &config).unwrap());
    }

    #[test]
    fn test_json_error_is_wrapped() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("failed to write layout JSON:"));
    }
}
