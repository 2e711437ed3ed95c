//! Wireframe SVG from layout results
//!
//! Every node becomes a `<rect>` at its viewport position. Containers open a
//! `<g>` around their children so the SVG nests like the drawable tree.

use crate::layout::{BoundingBox, LayoutResult, Policy};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the box of one node
    pub fn add_box(&mut self, id: Option<&str>, bounds: BoundingBox, classes: &[String]) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            classes.join(" "),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
        ));
    }

    /// Add a name label in the top-left corner of a box
    pub fn add_name(&mut self, name: &str, bounds: BoundingBox) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}name" x="{}" y="{}" dominant-baseline="hanging">{}</text>"#,
            self.indent_str(),
            prefix,
            bounds.x + 2.0,
            bounds.y + 2.0,
            escape_xml(name)
        ));
    }

    /// Open a group element
    pub fn start_group(&mut self, classes: &[String]) {
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };
        self.elements
            .push(format!("{}<g{}>", self.indent_str(), class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            viewbox.x - padding,
            viewbox.y - padding,
            viewbox.width + 2.0 * padding,
            viewbox.height + 2.0 * padding
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a layout result as a wireframe SVG
pub fn render_svg(result: &LayoutResult, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    let viewbox = result
        .absolute_boxes()
        .iter()
        .map(|placed| placed.bounds)
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default();

    render_node(&mut builder, result, 0.0, 0.0);
    builder.build(viewbox)
}

fn render_node(builder: &mut SvgBuilder, node: &LayoutResult, origin_x: f64, origin_y: f64) {
    let prefix = builder.prefix();
    let bounds = BoundingBox::new(
        origin_x + node.left,
        origin_y + node.top,
        node.width,
        node.height,
    );

    let mut classes = vec![format!("{}{}", prefix, policy_class(node.policy))];
    if node.is_absolute() {
        classes.push(format!("{}absolute", prefix));
    }

    builder.add_box(node.name.as_deref(), bounds, &classes);
    if builder.config.show_names {
        if let Some(name) = &node.name {
            builder.add_name(name, bounds);
        }
    }

    if node.children.is_empty() {
        return;
    }

    builder.start_group(&[format!("{}children", prefix)]);
    for child in &node.children {
        render_node(builder, child, bounds.x, bounds.y);
    }
    builder.end_group();
}

fn policy_class(policy: Policy) -> &'static str {
    match policy {
        Policy::Intrinsic => "drawable",
        Policy::Stacked => "stack",
        Policy::Flowed => "flow",
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
