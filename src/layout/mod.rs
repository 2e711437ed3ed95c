//! Layout engine for computing drawable positions and sizes
//!
//! This module takes a tree of [`Positionable`] nodes and the app window size
//! and computes the pixel box of every node, producing a [`LayoutResult`] tree.

pub mod config;
pub mod engine;
pub mod error;
pub mod node;
pub mod policy;
pub mod types;
pub mod value;

pub use config::LayoutConfig;
pub use engine::{calculate_layout, calculate_layout_with_config};
pub use error::LayoutError;
pub use node::Positionable;
pub use policy::{Policy, POSITION_ALIASES, POSITION_TYPES};
pub use types::*;
pub use value::{resolve_size, MalformedSize, Properties, PropertyValue, SizeRequest};

/// Style names that affect geometry; a change to any of them needs a new layout pass
pub const GEOMETRY_KEYS: &[&str] = &[
    "top",
    "left",
    "width",
    "height",
    "margin",
    "margin_left",
    "margin_top",
    "margin_right",
    "margin_bottom",
];

/// Whether changing the named style can move or resize anything
pub fn affects_geometry(name: &str) -> bool {
    GEOMETRY_KEYS.contains(&name)
}
