//! Wireframe output options

/// How `render_svg` writes its output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Space around the outermost box, in viewBox units
    pub viewbox_padding: f64,
    /// Emit the `<?xml ...?>` declaration
    pub standalone: bool,
    /// One element per line, indented by nesting depth
    pub pretty_print: bool,
    /// Prepended to every class name; `sl-` gives `sl-stack`, `sl-flow`, ...
    pub class_prefix: Option<String>,
    /// Label named boxes with their name
    pub show_names: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 10.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("sl-".to_string()),
            show_names: false,
        }
    }
}

impl SvgConfig {
    pub fn with_names(mut self, show: bool) -> Self {
        self.show_names = show;
        self
    }

    /// A single line with no XML declaration, for embedding in other markup
    pub fn compact(self) -> Self {
        Self {
            standalone: false,
            pretty_print: false,
            ..self
        }
    }
}
