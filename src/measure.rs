//! Text measurement for layout hints.
//!
//! The editor sizes its text field from the rendered width of a reference
//! string. On a terminal the rendering surface is a grid of cells, so the
//! default measurer counts display columns.

use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a piece of text
///
/// Returns `None` when no rendering surface is available. Callers keep
/// whatever width they had before in that case.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str) -> Option<f64>;
}

/// Measures text in terminal cells
///
/// Wide glyphs (CJK, most emoji) count as two cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str) -> Option<f64> {
        Some(UnicodeWidthStr::width(text) as f64)
    }
}

/// Measurer for contexts without a rendering surface
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmeasurable;

impl TextMeasurer for Unmeasurable {
    fn measure(&self, _text: &str) -> Option<f64> {
        None
    }
}
