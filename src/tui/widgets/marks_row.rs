use ratatui::{buffer::Buffer, layout::Rect};
use unicode_width::UnicodeWidthStr;

use crate::editor::ValueRange;
use crate::styles::SliderStyles;
use crate::tui::component::ElementWidget;

use super::slider_track::column_for_value;

/// Mark labels centered under their dots on the track
///
/// Labels that would overlap the previous one are skipped; labels near the
/// ends are shifted inward to stay inside the row.
#[derive(Debug, Clone)]
pub struct MarksRow {
    pub range: ValueRange,
    pub value: f64,
    pub styles: SliderStyles,
}

impl ElementWidget for MarksRow {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut next_free = area.x;

        for mark in self.range.marks.iter() {
            if !self.range.contains(mark.position) {
                continue;
            }
            let width = mark.label.width() as u16;
            if width == 0 || width > area.width {
                continue;
            }

            let center = column_for_value(&self.range, area, mark.position);
            let start = center
                .saturating_sub(width / 2)
                .max(area.x)
                .min(area.right() - width);
            if start < next_free {
                continue;
            }

            let style = if self.range.is_mark_active(mark, self.value) {
                self.styles.mark_text_active
            } else {
                self.styles.mark_text
            };
            buf.set_string(start, area.y, &mark.label, style);
            next_free = start + width + 1;
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
