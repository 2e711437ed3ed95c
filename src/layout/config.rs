//! Configuration for the layout engine

/// Configuration options for layout computation
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Offset in-flow children by their margins and advance the stacking and
    /// flowing cursors past them. Margins are resolved and reported either way.
    pub apply_margins: bool,
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable margin-aware placement
    pub fn with_margins(mut self, apply: bool) -> Self {
        self.apply_margins = apply;
        self
    }
}
