//! Output for layout results
//!
//! `render_svg` draws a wireframe of every box with CSS classes per policy;
//! `render_tree` prints the same tree as indented text.

pub mod config;
pub mod svg;
pub mod tree;

pub use config::SvgConfig;
pub use svg::render_svg;
pub use tree::render_tree;
