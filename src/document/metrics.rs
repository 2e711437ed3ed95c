//! Native minimum-size estimation
//!
//! A real display backend asks the toolkit for a widget's preferred size.
//! Without one, we estimate from the text and font size: roughly half the font
//! size per character and a fixed line height ratio, plus fixed sizes for
//! checkboxes, radios, edit boxes and progress bars.

use crate::layout::{Properties, PropertyValue, Size};

use super::drawable::DrawableKind;

/// Size estimates used in place of a toolkit's preferred-size query
#[derive(Debug, Clone, PartialEq)]
pub struct NativeMetrics {
    /// Average glyph width as a fraction of the font size
    pub char_width_ratio: f64,
    /// Line height as a multiple of the font size
    pub line_height_ratio: f64,
    /// Horizontal and vertical padding around button labels
    pub button_padding: (f64, f64),
    /// Side length of checkboxes and radio buttons
    pub toggle_size: f64,
    pub edit_box_size: Size,
    pub edit_line_size: Size,
    pub progress_size: Size,
}

impl Default for NativeMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.5,
            line_height_ratio: 1.25,
            button_padding: (12.0, 6.0),
            toggle_size: 20.0,
            edit_box_size: Size::new(200.0, 100.0),
            edit_line_size: Size::new(200.0, 28.0),
            progress_size: Size::new(150.0, 16.0),
        }
    }
}

impl NativeMetrics {
    /// Create metrics with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph width ratio
    pub fn with_char_width_ratio(mut self, ratio: f64) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    /// Set the line height ratio
    pub fn with_line_height_ratio(mut self, ratio: f64) -> Self {
        self.line_height_ratio = ratio;
        self
    }

    /// Set the button label padding
    pub fn with_button_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.button_padding = (horizontal, vertical);
        self
    }

    /// Estimate the minimum size of a drawable of `kind` with these styles
    pub fn measure(&self, kind: DrawableKind, properties: &Properties) -> Size {
        let text = properties
            .get("text")
            .and_then(PropertyValue::as_str)
            .unwrap_or("");
        let font_size = properties
            .get("size")
            .and_then(PropertyValue::as_f64)
            .filter(|s| *s > 0.0)
            .unwrap_or_else(|| kind.default_font_size());

        match kind {
            DrawableKind::Button => {
                let label = self.measure_text(text, font_size);
                let (px, py) = self.button_padding;
                Size::new(label.width + 2.0 * px, label.height + 2.0 * py)
            }
            DrawableKind::Check | DrawableKind::Radio => {
                Size::new(self.toggle_size, self.toggle_size)
            }
            DrawableKind::EditBox => self.edit_box_size,
            DrawableKind::EditLine => self.edit_line_size,
            DrawableKind::Progress => self.progress_size,
            k if k.is_text_block() => self.measure_text(text, font_size),
            _ => Size::zero(),
        }
    }

    /// Size of a block of text; lines only break at explicit newlines
    pub fn measure_text(&self, text: &str, font_size: f64) -> Size {
        if text.is_empty() {
            return Size::zero();
        }
        let lines: Vec<&str> = text.split('\n').collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Size::new(
            longest as f64 * font_size * self.char_width_ratio,
            lines.len() as f64 * font_size * self.line_height_ratio,
        )
    }
}
