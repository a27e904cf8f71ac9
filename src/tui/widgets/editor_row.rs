use ratatui::{buffer::Buffer, layout::Rect};

use crate::editor::ValueRange;
use crate::styles::SliderStyles;
use crate::tui::component::ElementWidget;
use crate::tui::components::value_editor::EditorFocus;
use crate::tui::layout::{editor_areas, field_height};

use super::{MarksRow, NumberInput, SliderTrack};

/// One value editor: label, slider track with marks, and the text field
#[derive(Debug, Clone)]
pub struct EditorRow {
    pub label: String,
    pub range: ValueRange,
    pub value: f64,
    /// What the text field shows
    pub text: String,
    pub editing: bool,
    /// Focused view, `None` when the editor does not have focus
    pub focus: Option<EditorFocus>,
    pub styles: SliderStyles,
    pub input_width: u16,
}

impl ElementWidget for EditorRow {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let areas = editor_areas(area, self.input_width, &self.styles);

        if areas.label.height > 0 {
            let style = if self.focus.is_some() {
                self.styles.label_focused
            } else {
                self.styles.label
            };
            buf.set_stringn(
                areas.label.x,
                areas.label.y,
                &self.label,
                areas.label.width as usize,
                style,
            );
        }

        SliderTrack {
            range: self.range.clone(),
            value: self.value,
            styles: self.styles.clone(),
            focused: self.focus == Some(EditorFocus::Slider),
        }
        .render(areas.track, buf);

        MarksRow {
            range: self.range.clone(),
            value: self.value,
            styles: self.styles.clone(),
        }
        .render(areas.marks, buf);

        let input_style = if self.editing {
            self.styles.input_editing
        } else if self.focus == Some(EditorFocus::Input) {
            self.styles.input_focused
        } else {
            self.styles.input
        };
        NumberInput {
            text: self.text.clone(),
            style: input_style,
        }
        .render(areas.input, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(field_height(&self.styles))
    }
}
