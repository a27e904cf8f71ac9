use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::ElementWidget;

/// Numeric text field drawn as `[ text ]`
///
/// The brackets take the padding cells on each side. Text wider than the
/// field shows its tail, where typing happens. Widths are display cells, so
/// pasted wide glyphs stay inside the brackets.
#[derive(Debug, Clone)]
pub struct NumberInput {
    pub text: String,
    pub style: Style,
}

/// Longest suffix of `text` fitting in `cells`, with its display width
fn tail(text: &str, cells: usize) -> (String, usize) {
    let mut width = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > cells {
            break;
        }
        width += w;
        start = index;
    }
    (text[start..].to_string(), width)
}

impl ElementWidget for NumberInput {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let y = area.y;
        let inner = (area.width - 2) as usize;

        let (visible, width) = tail(&self.text, inner);
        let offset = (inner - width) / 2;

        buf.set_string(area.x, y, "[", self.style);
        buf.set_string(area.x + 1, y, " ".repeat(inner), self.style);
        buf.set_string(area.x + 1 + offset as u16, y, &visible, self.style);
        buf.set_string(area.right() - 1, y, "]", self.style);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
