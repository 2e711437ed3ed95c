//! Layout computation engine
//!
//! Given a tree of [`Positionable`] nodes and the size of the app window,
//! compute the pixel position and size of every node. Each call is a full
//! pass: nothing is cached between calls and the node tree is only read.
//!
//! ## Resolution order
//!
//! 1. Resolve the node's own `width`, `height`, `top`, `left` and margins
//!    against the containing box (see [`resolve_size`]).
//! 2. Intrinsic nodes fall back to their native minimum size.
//! 3. Stacked and Flowed nodes lay out their children inside their own box,
//!    then size any dimension they didn't ask for to their in-flow content.
//!
//! Child results are relative to the parent's box. A child with an explicit
//! `top` or `left` is positioned absolutely inside the parent and doesn't push
//! its siblings around.
//!
//! [`resolve_size`]: super::value::resolve_size

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::node::Positionable;
use super::policy::Policy;
use super::types::{Edges, LayoutContext, LayoutResult, Placement};
use super::value::resolve_size;

/// Lay out `node` and its subtree inside `ctx` with the default configuration
pub fn calculate_layout(
    node: &dyn Positionable,
    ctx: &LayoutContext,
) -> Result<LayoutResult, LayoutError> {
    calculate_layout_with_config(node, ctx, &LayoutConfig::default())
}

/// Lay out `node` and its subtree inside `ctx`.
///
/// Fails on the first malformed property or unresolvable container size;
/// no partial result is produced.
pub fn calculate_layout_with_config(
    node: &dyn Positionable,
    ctx: &LayoutContext,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    tracing::debug!(
        width = ctx.width,
        height = ctx.height,
        apply_margins = config.apply_margins,
        "starting layout pass"
    );
    let result = layout_node(&NodeRef::new(node, "root".to_string()), ctx, config)?;
    tracing::debug!(nodes = result.node_count(), "layout pass complete");
    Ok(result)
}

/// A node together with its position in the tree, for error messages
struct NodeRef<'a> {
    node: &'a dyn Positionable,
    path: String,
}

impl<'a> NodeRef<'a> {
    fn new(node: &'a dyn Positionable, path: String) -> Self {
        Self { node, path }
    }

    fn child(&self, node: &'a dyn Positionable, index: usize) -> NodeRef<'a> {
        NodeRef::new(node, format!("{}/{}", self.path, index))
    }

    fn describe(&self) -> String {
        let kind = self.node.policy().type_name();
        match self.node.pos_name() {
            Some(name) => format!("{} '{}' ({})", kind, name, self.path),
            None => format!("{} ({})", kind, self.path),
        }
    }

    /// Resolve one property against a container dimension
    fn resolve(&self, key: &str, container: f64) -> Result<Option<f64>, LayoutError> {
        match self.node.pos_property(key) {
            None => Ok(None),
            Some(value) => resolve_size(value, container)
                .map_err(|e| LayoutError::malformed(self.describe(), key, e.0.to_string())),
        }
    }

    /// Resolve one margin side, falling back to the `margin` shorthand
    fn resolve_margin(&self, key: &str, container: f64) -> Result<f64, LayoutError> {
        let side = self.node.pos_property(key).filter(|v| !v.is_nil());
        let key = if side.is_some() { key } else { "margin" };
        Ok(self.resolve(key, container)?.unwrap_or(0.0))
    }

    fn resolve_margins(&self, ctx: &LayoutContext) -> Result<Edges, LayoutError> {
        Ok(Edges::new(
            self.resolve_margin("margin_left", ctx.width)?,
            self.resolve_margin("margin_top", ctx.height)?,
            self.resolve_margin("margin_right", ctx.width)?,
            self.resolve_margin("margin_bottom", ctx.height)?,
        ))
    }
}

fn layout_node(
    node: &NodeRef<'_>,
    ctx: &LayoutContext,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    let policy = node.node.policy();

    // If there is a requested width, height, top or left, use it
    let mut width = node.resolve("width", ctx.width)?;
    let mut height = node.resolve("height", ctx.height)?;
    let top = node.resolve("top", ctx.height)?;
    let left = node.resolve("left", ctx.width)?;
    let margin = node.resolve_margins(ctx)?;

    let placement = if top.is_some() || left.is_some() {
        Placement::Absolute
    } else {
        Placement::InFlow
    };
    let offset = placement_margin(&margin, config);

    // Failing that, a plain drawable uses its native size
    if policy == Policy::Intrinsic && (width.is_none() || height.is_none()) {
        let min = node.node.pos_minimum_size();
        width = width.or(Some(min.width));
        height = height.or(Some(min.height));
    }

    let top = top.unwrap_or(ctx.top + offset.top);
    let left = left.unwrap_or(ctx.left + offset.left);

    // Children resolve against our own size, or what we were offered if we
    // are sizing ourselves to our content
    let inner = LayoutContext::new(
        0.0,
        0.0,
        width.unwrap_or((ctx.width - offset.horizontal()).max(0.0)),
        height.unwrap_or((ctx.height - offset.vertical()).max(0.0)),
    );

    let children = match policy {
        Policy::Intrinsic => vec![],
        Policy::Stacked => layout_stacked(node, &inner, config)?,
        Policy::Flowed => layout_flowed(node, &inner, config)?,
    };

    if policy.is_container() && (width.is_none() || height.is_none()) {
        if let Some((right, bottom)) = content_extent(&children, config) {
            width = width.or(Some(right));
            height = height.or(Some(bottom));
        }
    }

    let width = width.ok_or_else(|| LayoutError::unresolvable(node.describe(), "width"))?;
    let height = height.ok_or_else(|| LayoutError::unresolvable(node.describe(), "height"))?;

    tracing::trace!(
        node = %node.path,
        %policy,
        top,
        left,
        width,
        height,
        "placed node"
    );

    Ok(LayoutResult {
        name: node.node.pos_name().map(str::to_string),
        policy,
        top,
        left,
        width,
        height,
        margin,
        placement,
        children,
    })
}

/// Margins that take part in placement under this configuration
fn placement_margin(margin: &Edges, config: &LayoutConfig) -> Edges {
    if config.apply_margins {
        *margin
    } else {
        Edges::zero()
    }
}

/// Top to bottom; each in-flow child starts below the previous one
fn layout_stacked(
    node: &NodeRef<'_>,
    inner: &LayoutContext,
    config: &LayoutConfig,
) -> Result<Vec<LayoutResult>, LayoutError> {
    let mut layouts = vec![];
    let mut next_top = inner.top;

    for (i, child) in node.node.pos_children().into_iter().enumerate() {
        let child_ref = node.child(child, i);
        let layout = layout_node(&child_ref, &inner.at(next_top, inner.left), config)?;
        if !layout.is_absolute() {
            next_top = layout.bottom() + placement_margin(&layout.margin, config).bottom;
        }
        layouts.push(layout);
    }

    Ok(layouts)
}

/// Left to right, wrapping into a new row when a child would stick out past
/// the right edge. The first child of a row never wraps, so a child wider than
/// the container gets a row of its own.
fn layout_flowed(
    node: &NodeRef<'_>,
    inner: &LayoutContext,
    config: &LayoutConfig,
) -> Result<Vec<LayoutResult>, LayoutError> {
    let mut layouts = vec![];
    let mut row_top = inner.top;
    let mut row_height = 0.0f64;
    let mut next_left = inner.left;
    let mut row_empty = true;

    for (i, child) in node.node.pos_children().into_iter().enumerate() {
        let child_ref = node.child(child, i);
        let mut layout = layout_node(&child_ref, &inner.at(row_top, next_left), config)?;
        if layout.is_absolute() {
            layouts.push(layout);
            continue;
        }

        let m = placement_margin(&layout.margin, config);
        let outer_right = layout.right() + m.right;

        if outer_right > inner.left + inner.width && !row_empty {
            // No space left to the right: start a new row
            row_top += row_height;
            layout.left = inner.left + m.left;
            layout.top = row_top + m.top;
            row_height = layout.height + m.vertical();
            tracing::trace!(node = %child_ref.path, row_top, "wrapped to new row");
        } else {
            row_height = row_height.max(layout.height + m.vertical());
        }
        next_left = layout.right() + m.right;
        row_empty = false;
        layouts.push(layout);
    }

    Ok(layouts)
}

/// Far right and bottom edges of the in-flow children, if there are any
fn content_extent(children: &[LayoutResult], config: &LayoutConfig) -> Option<(f64, f64)> {
    children
        .iter()
        .filter(|c| !c.is_absolute())
        .map(|c| {
            let m = placement_margin(&c.margin, config);
            (c.right() + m.right, c.bottom() + m.bottom)
        })
        .reduce(|(r1, b1), (r2, b2)| (r1.max(r2), b1.max(b2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Size;
    use crate::layout::value::{Properties, PropertyValue};

    /// About as simple a positionable as possible
    struct TestNode {
        policy: Policy,
        props: Properties,
        children: Vec<TestNode>,
        native: Size,
    }

    impl Positionable for TestNode {
        fn policy(&self) -> Policy {
            self.policy
        }

        fn pos_properties(&self) -> &Properties {
            &self.props
        }

        fn pos_children(&self) -> Vec<&dyn Positionable> {
            self.children
                .iter()
                .map(|c| c as &dyn Positionable)
                .collect()
        }

        fn pos_minimum_size(&self) -> Size {
            self.native
        }
    }

    fn props(pairs: &[(&str, PropertyValue)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn flow(pairs: &[(&str, PropertyValue)], children: Vec<TestNode>) -> TestNode {
        TestNode {
            policy: Policy::Flowed,
            props: props(pairs),
            children,
            native: Size::zero(),
        }
    }

    fn stack(pairs: &[(&str, PropertyValue)], children: Vec<TestNode>) -> TestNode {
        TestNode {
            policy: Policy::Stacked,
            ..flow(pairs, children)
        }
    }

    fn drawable(w: f64, h: f64, pairs: &[(&str, PropertyValue)]) -> TestNode {
        TestNode {
            policy: Policy::Intrinsic,
            props: props(pairs),
            children: vec![],
            native: Size::new(w, h),
        }
    }

    fn app() -> LayoutContext {
        LayoutContext::viewport(300.0, 450.0)
    }

    fn full() -> Vec<(&'static str, PropertyValue)> {
        vec![("width", "100%".into()), ("height", "100%".into())]
    }

    #[test]
    fn test_root_fills_viewport() {
        let root = flow(&full(), vec![]);
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!((pos.top, pos.left, pos.width, pos.height), (0.0, 0.0, 300.0, 450.0));
        assert!(pos.children.is_empty());
    }

    #[test]
    fn test_intrinsic_uses_native_size() {
        let root = flow(&full(), vec![drawable(100.0, 50.0, &[])]);
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!(pos.children[0].bounds().width, 100.0);
        assert_eq!(pos.children[0].bounds().height, 50.0);
    }

    #[test]
    fn test_explicit_width_overrides_native_only_on_that_axis() {
        let root = flow(&full(), vec![drawable(100.0, 50.0, &[("width", 110.into())])]);
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!((pos.children[0].width, pos.children[0].height), (110.0, 50.0));
    }

    #[test]
    fn test_stack_children_follow_each_other() {
        let root = flow(
            &full(),
            vec![stack(
                &full(),
                vec![drawable(75.0, 50.0, &[]), drawable(100.0, 65.0, &[])],
            )],
        );
        let pos = calculate_layout(&root, &app()).unwrap();
        let s = &pos.children[0];
        assert_eq!((s.children[0].top, s.children[0].left), (0.0, 0.0));
        assert_eq!((s.children[1].top, s.children[1].left), (50.0, 0.0));
    }

    #[test]
    fn test_flow_wraps_only_after_first_in_row() {
        // A single child wider than the flow stays on the first row
        let root = flow(&full(), vec![drawable(350.0, 20.0, &[])]);
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!((pos.children[0].top, pos.children[0].left), (0.0, 0.0));
    }

    #[test]
    fn test_zero_width_first_child_still_counts_as_row_member() {
        let root = flow(
            &full(),
            vec![drawable(0.0, 10.0, &[]), drawable(350.0, 20.0, &[])],
        );
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!(pos.children[1].top, 10.0);
        assert_eq!(pos.children[1].left, 0.0);
    }

    #[test]
    fn test_content_sized_stack() {
        let root = flow(
            &full(),
            vec![stack(&[], vec![drawable(100.0, 50.0, &[]), drawable(150.0, 90.0, &[])])],
        );
        let pos = calculate_layout(&root, &app()).unwrap();
        assert_eq!((pos.children[0].width, pos.children[0].height), (150.0, 140.0));
    }

    #[test]
    fn test_empty_stack_without_size_fails() {
        let root = flow(&full(), vec![stack(&[], vec![])]);
        let err = calculate_layout(&root, &app()).unwrap_err();
        assert_eq!(err, LayoutError::unresolvable("Stack (root/0)", "width"));
    }

    #[test]
    fn test_malformed_value_names_node_and_property() {
        let root = flow(
            &full(),
            vec![stack(&full(), vec![drawable(1.0, 1.0, &[("height", true.into())])])],
        );
        let err = calculate_layout(&root, &app()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::malformed("Drawable (root/0/0)", "height", "true")
        );
    }

    #[test]
    fn test_malformed_margin_reports_shorthand_key() {
        let root = flow(&full(), vec![drawable(1.0, 1.0, &[("margin", "wide".into())])]);
        let err = calculate_layout(&root, &app()).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedValue { ref property, .. } if property == "margin"));
    }

    #[test]
    fn test_margins_are_reported_but_not_applied_by_default() {
        let root = flow(
            &full(),
            vec![drawable(
                10.0,
                10.0,
                &[("margin", 5.into()), ("margin_left", "10%".into())],
            )],
        );
        let pos = calculate_layout(&root, &app()).unwrap();
        let child = &pos.children[0];
        assert_eq!(child.margin, Edges::new(30.0, 5.0, 5.0, 5.0));
        assert_eq!((child.top, child.left), (0.0, 0.0));
    }

    #[test]
    fn test_applied_margins_offset_and_advance() {
        let root = stack(
            &full(),
            vec![
                drawable(50.0, 20.0, &[("margin", 10.into())]),
                drawable(50.0, 20.0, &[]),
            ],
        );
        let config = LayoutConfig::new().with_margins(true);
        let pos = calculate_layout_with_config(&root, &app(), &config).unwrap();
        assert_eq!((pos.children[0].top, pos.children[0].left), (10.0, 10.0));
        assert_eq!(pos.children[1].top, 40.0);
    }

    #[test]
    fn test_idempotent() {
        let root = flow(
            &full(),
            vec![
                drawable(100.0, 50.0, &[("width", "33%".into())]),
                stack(&[("left", (-0.25).into())], vec![drawable(20.0, 20.0, &[])]),
            ],
        );
        let a = calculate_layout(&root, &app()).unwrap();
        let b = calculate_layout(&root, &app()).unwrap();
        assert_eq!(a, b);
    }
}
