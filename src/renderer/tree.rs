//! Indented text dump of a layout result

use std::fmt::Write;

use crate::layout::LayoutResult;

/// One line per node, children indented two spaces under their parent.
///
/// Coordinates are the node's own `left`/`top`, relative to its parent.
pub fn render_tree(result: &LayoutResult) -> String {
    let mut out = String::new();
    write_node(&mut out, result, 0);
    out
}

fn write_node(out: &mut String, node: &LayoutResult, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = node.name.as_deref().unwrap_or("<anon>");
    // Writing to a String cannot fail
    let _ = write!(
        out,
        "{}[{}] {} x={} y={} w={} h={}",
        indent, name, node.policy, node.left, node.top, node.width, node.height
    );
    if node.is_absolute() {
        out.push_str(" absolute");
    }
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
