/// StatusLine widget - one row at the bottom of the screen
///
/// Left: the latest status message, or key hints for the focused editor.
/// Right: the number of changes reported to the owner so far.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::ElementWidget;

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: Option<String>,
    pub is_error: bool,
    pub hint: String,
    pub changes: u32,
    pub text_style: Style,
    pub error_style: Style,
    pub hint_style: Style,
}

impl StatusLine {
    fn counter(&self) -> String {
        match self.changes {
            1 => "1 change".to_string(),
            n => format!("{} changes", n),
        }
    }
}

impl ElementWidget for StatusLine {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let counter = format!(" {} ", self.counter());
        let counter_width = (counter.width() as u16).min(area.width);
        let left_width = area.width - counter_width;

        let left = match &self.message {
            Some(message) if self.is_error => Span::styled(format!(" {}", message), self.error_style),
            Some(message) => Span::styled(format!(" {}", message), self.text_style),
            None => Span::styled(format!(" {}", self.hint), self.hint_style),
        };
        Line::from(left).render(Rect::new(area.x, area.y, left_width, 1), buf);

        Line::from(Span::styled(counter, self.hint_style))
            .render(Rect::new(area.x + left_width, area.y, counter_width, 1), buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;
    use ratatui::style::Color;

    fn status(message: Option<&str>, is_error: bool, changes: u32) -> StatusLine {
        StatusLine {
            message: message.map(str::to_string),
            is_error,
            hint: "Tab edit".to_string(),
            changes,
            text_style: Style::default(),
            error_style: Style::default().fg(Color::Red),
            hint_style: Style::default(),
        }
    }

    #[test]
    fn test_hint_shown_without_message() {
        let buf = render_widget(&status(None, false, 0), 30, 1);
        assert_buffer_line(&buf, 0, " Tab edit           0 changes ");
    }

    #[test]
    fn test_message_replaces_hint() {
        let buf = render_widget(&status(Some("Width = 30"), false, 1), 30, 1);
        assert_buffer_line(&buf, 0, " Width = 30          1 change ");
    }

    #[test]
    fn test_error_message_style() {
        let buf = render_widget(&status(Some("bad"), true, 2), 30, 1);
        assert_eq!(buf[(1, 0)].fg, Color::Red);
    }
}
