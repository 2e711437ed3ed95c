//! Concrete drawables
//!
//! A [`Drawable`] is the display-side counterpart of one Shoes drawable: its
//! type, its current styles and its children. It implements [`Positionable`]
//! so a tree of them can be handed straight to the layout engine.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::layout::{
    affects_geometry, LayoutError, Policy, Positionable, Properties, PropertyValue, Size,
    POSITION_TYPES,
};

use super::metrics::NativeMetrics;

/// Every drawable type the positioning layer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DrawableKind {
    DocumentRoot,
    Stack,
    Flow,
    Widget,
    Slot,
    /// A plain box with only a native size
    Drawable,
    Button,
    Para,
    Banner,
    Title,
    Subtitle,
    Tagline,
    Caption,
    Inscription,
    EditBox,
    EditLine,
    Check,
    Radio,
    Progress,
    Image,
}

impl DrawableKind {
    pub const ALL: &'static [DrawableKind] = &[
        DrawableKind::DocumentRoot,
        DrawableKind::Stack,
        DrawableKind::Flow,
        DrawableKind::Widget,
        DrawableKind::Slot,
        DrawableKind::Drawable,
        DrawableKind::Button,
        DrawableKind::Para,
        DrawableKind::Banner,
        DrawableKind::Title,
        DrawableKind::Subtitle,
        DrawableKind::Tagline,
        DrawableKind::Caption,
        DrawableKind::Inscription,
        DrawableKind::EditBox,
        DrawableKind::EditLine,
        DrawableKind::Check,
        DrawableKind::Radio,
        DrawableKind::Progress,
        DrawableKind::Image,
    ];

    /// The Shoes type name
    pub fn type_name(self) -> &'static str {
        match self {
            DrawableKind::DocumentRoot => "DocumentRoot",
            DrawableKind::Stack => "Stack",
            DrawableKind::Flow => "Flow",
            DrawableKind::Widget => "Widget",
            DrawableKind::Slot => "Slot",
            DrawableKind::Drawable => "Drawable",
            DrawableKind::Button => "Button",
            DrawableKind::Para => "Para",
            DrawableKind::Banner => "Banner",
            DrawableKind::Title => "Title",
            DrawableKind::Subtitle => "Subtitle",
            DrawableKind::Tagline => "Tagline",
            DrawableKind::Caption => "Caption",
            DrawableKind::Inscription => "Inscription",
            DrawableKind::EditBox => "EditBox",
            DrawableKind::EditLine => "EditLine",
            DrawableKind::Check => "Check",
            DrawableKind::Radio => "Radio",
            DrawableKind::Progress => "Progress",
            DrawableKind::Image => "Image",
        }
    }

    /// How this type positions
    pub fn policy(self) -> Policy {
        match self {
            DrawableKind::Stack => Policy::Stacked,
            DrawableKind::Flow
            | DrawableKind::DocumentRoot
            | DrawableKind::Widget
            | DrawableKind::Slot => Policy::Flowed,
            _ => Policy::Intrinsic,
        }
    }

    /// Text drawables that size to their content
    pub fn is_text_block(self) -> bool {
        matches!(
            self,
            DrawableKind::Para
                | DrawableKind::Banner
                | DrawableKind::Title
                | DrawableKind::Subtitle
                | DrawableKind::Tagline
                | DrawableKind::Caption
                | DrawableKind::Inscription
        )
    }

    /// Default font size for this type's text
    pub fn default_font_size(self) -> f64 {
        match self {
            DrawableKind::Banner => 48.0,
            DrawableKind::Title => 34.0,
            DrawableKind::Subtitle => 26.0,
            DrawableKind::Tagline => 18.0,
            DrawableKind::Caption => 14.0,
            DrawableKind::Inscription => 10.0,
            _ => 12.0,
        }
    }
}

impl FromStr for DrawableKind {
    type Err = LayoutError;

    /// Parse a type name, rejecting anything `position_as` doesn't know
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::position_as(s)?;
        DrawableKind::ALL
            .iter()
            .copied()
            .find(|k| k.type_name() == s)
            .ok_or_else(|| LayoutError::unknown_policy(s, POSITION_TYPES))
    }
}

impl TryFrom<String> for DrawableKind {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DrawableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// What a property change requires from the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Invalidation {
    /// The value didn't change
    None,
    /// Only appearance changed; positions and sizes still hold
    Repaint,
    /// Geometry may have changed; run a new layout pass
    Relayout,
}

/// A display drawable that can be positioned
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDrawable")]
pub struct Drawable {
    kind: DrawableKind,
    policy: Policy,
    name: Option<String>,
    properties: Properties,
    children: Vec<Drawable>,
    /// Size reported by the toolkit, if known
    native_size: Option<Size>,
    /// Estimates used when there is no native size
    metrics: NativeMetrics,
}

/// Serialized form: `type`, `name`, `native_size`, `children`, and every
/// other key is a style property
#[derive(Deserialize)]
struct RawDrawable {
    #[serde(rename = "type")]
    kind: DrawableKind,
    name: Option<String>,
    native_size: Option<[u32; 2]>,
    #[serde(default)]
    children: Vec<Drawable>,
    #[serde(flatten)]
    properties: Properties,
}

impl From<RawDrawable> for Drawable {
    fn from(raw: RawDrawable) -> Self {
        let mut drawable = Drawable::new(raw.kind).with_children(raw.children);
        drawable.name = raw.name;
        drawable.native_size = raw.native_size.map(Size::from);
        drawable.properties = raw
            .properties
            .into_iter()
            .filter(|(_, v)| !v.is_nil())
            .collect();
        drawable
    }
}

impl Drawable {
    /// Create a drawable of the given kind with no styles or children
    pub fn new(kind: DrawableKind) -> Self {
        Self {
            kind,
            policy: kind.policy(),
            name: None,
            properties: Properties::new(),
            children: vec![],
            native_size: None,
            metrics: NativeMetrics::default(),
        }
    }

    /// Create a drawable from a Shoes type name
    pub fn from_type_name(type_name: &str) -> Result<Self, LayoutError> {
        Ok(Self::new(type_name.parse()?))
    }

    /// The top-level slot of an app; fills the window unless told otherwise
    pub fn document_root() -> Self {
        Self::new(DrawableKind::DocumentRoot)
            .with_property("width", "100%")
            .with_property("height", "100%")
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn with_native_size(mut self, width: f64, height: f64) -> Self {
        self.native_size = Some(Size::new(width, height));
        self
    }

    pub fn with_child(mut self, child: Drawable) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Drawable>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> DrawableKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Drawable> {
        &mut self.children
    }

    /// Update one style and report what the change invalidates.
    ///
    /// Setting nil removes the style.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Invalidation {
        let key = key.into();
        let value = value.into();

        let changed = if value.is_nil() {
            self.properties.remove(&key).is_some()
        } else if self.properties.get(&key) == Some(&value) {
            false
        } else {
            self.properties.insert(key.clone(), value);
            true
        };

        if !changed {
            Invalidation::None
        } else if affects_geometry(&key) || self.changes_native_size(&key) {
            Invalidation::Relayout
        } else {
            Invalidation::Repaint
        }
    }

    fn changes_native_size(&self, key: &str) -> bool {
        self.policy == Policy::Intrinsic
            && self.native_size.is_none()
            && matches!(key, "text" | "size")
    }

    /// Use `metrics` for size estimates in this whole subtree
    pub fn set_metrics(&mut self, metrics: &NativeMetrics) {
        self.metrics = metrics.clone();
        for child in &mut self.children {
            child.set_metrics(metrics);
        }
    }

    pub fn metrics(&self) -> &NativeMetrics {
        &self.metrics
    }

    /// Find a drawable by name in this subtree, depth first
    pub fn find(&self, name: &str) -> Option<&Drawable> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Drawable> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }
}

impl Positionable for Drawable {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn pos_properties(&self) -> &Properties {
        &self.properties
    }

    fn pos_children(&self) -> Vec<&dyn Positionable> {
        self.children
            .iter()
            .map(|c| c as &dyn Positionable)
            .collect()
    }

    fn pos_minimum_size(&self) -> Size {
        self.native_size
            .unwrap_or_else(|| self.metrics.measure(self.kind, &self.properties))
    }

    fn pos_name(&self) -> Option<&str> {
        self.name()
    }
}
