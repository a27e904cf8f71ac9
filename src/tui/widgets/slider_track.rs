/// SliderTrack widget - the drag control of a value editor
///
/// One row: the rail, the filled part of the track up to the handle when the
/// range is `included`, a dot at every mark, and the handle itself.
use ratatui::{buffer::Buffer, layout::Rect};

use crate::editor::ValueRange;
use crate::styles::SliderStyles;
use crate::tui::component::ElementWidget;

pub const RAIL: &str = "─";
pub const TRACK: &str = "━";
pub const DOT: &str = "•";
pub const HANDLE: &str = "●";

/// Column of `value` on a track drawn in `track`
pub fn column_for_value(range: &ValueRange, track: Rect, value: f64) -> u16 {
    if track.width == 0 {
        return track.x;
    }
    let last = f64::from(track.width - 1);
    track.x + (range.ratio(value) * last).round() as u16
}

/// Snapped value under `column` of a track drawn in `track`
///
/// Columns left or right of the track map to the nearest end.
pub fn value_at_column(range: &ValueRange, track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return range.value_at_ratio(0.0);
    }
    let last = track.width - 1;
    let offset = column.saturating_sub(track.x).min(last);
    range.value_at_ratio(f64::from(offset) / f64::from(last))
}

#[derive(Debug, Clone)]
pub struct SliderTrack {
    pub range: ValueRange,
    pub value: f64,
    pub styles: SliderStyles,
    pub focused: bool,
}

impl ElementWidget for SliderTrack {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let y = area.y;
        let handle = column_for_value(&self.range, area, self.value);

        for x in area.left()..area.right() {
            if self.range.included && x < handle {
                buf.set_string(x, y, TRACK, self.styles.track);
            } else {
                buf.set_string(x, y, RAIL, self.styles.rail);
            }
        }

        for mark in self.range.marks.iter() {
            if !self.range.contains(mark.position) {
                continue;
            }
            let x = column_for_value(&self.range, area, mark.position);
            buf.set_string(x, y, DOT, self.styles.dot);
        }

        let handle_style = if self.focused {
            self.styles.handle_focused
        } else {
            self.styles.handle
        };
        buf.set_string(handle, y, HANDLE, handle_style);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
