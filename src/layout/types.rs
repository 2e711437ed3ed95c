//! Core types for the layout engine

use serde::{Deserialize, Serialize};

use super::policy::Policy;

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<[u32; 2]> for Size {
    fn from([width, height]: [u32; 2]) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// Per-side distances, used for margins
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Edges {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A box in some coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box overlaps another (touching edges do not count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// The containing box handed to a recursive layout call.
///
/// `top`/`left` are where the node goes if it doesn't ask for a position;
/// `width`/`height` are what its percentages and far-edge offsets resolve against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutContext {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Root context for an app window of the given size
    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn at(self, top: f64, left: f64) -> Self {
        Self { top, left, ..self }
    }
}

/// Whether a node takes part in its parent's stacking/flowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    InFlow,
    /// Explicit `top` or `left`; placed inside the parent without moving siblings
    Absolute,
}

/// Resolved position and size of a node, plus its children's results.
///
/// `top`/`left` are relative to the parent's box (the root's are in viewport
/// coordinates). `children` is index-aligned with the node's children for
/// Stacked and Flowed nodes and empty for Intrinsic ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub policy: Policy,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub margin: Edges,
    pub placement: Placement,
    #[serde(default)]
    pub children: Vec<LayoutResult>,
}

impl LayoutResult {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The node's box in its parent's frame
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.left, self.top, self.width, self.height)
    }

    pub fn is_absolute(&self) -> bool {
        self.placement == Placement::Absolute
    }

    /// Follow a path of child indices down from this node
    pub fn child_at(&self, path: &[usize]) -> Option<&LayoutResult> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Find the first node with the given name, depth first
    pub fn find(&self, name: &str) -> Option<&LayoutResult> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Flatten the tree into viewport coordinates, parents before children
    pub fn absolute_boxes(&self) -> Vec<PlacedBox<'_>> {
        let mut boxes = vec![];
        collect_absolute(self, 0.0, 0.0, 0, &mut boxes);
        boxes
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }
}

/// A node's box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBox<'a> {
    pub node: &'a LayoutResult,
    pub depth: usize,
    pub bounds: BoundingBox,
}

fn collect_absolute<'a>(
    node: &'a LayoutResult,
    origin_x: f64,
    origin_y: f64,
    depth: usize,
    out: &mut Vec<PlacedBox<'a>>,
) {
    let bounds = BoundingBox::new(
        origin_x + node.left,
        origin_y + node.top,
        node.width,
        node.height,
    );
    out.push(PlacedBox {
        node,
        depth,
        bounds,
    });
    for child in &node.children {
        collect_absolute(child, bounds.x, bounds.y, depth + 1, out);
    }
}
