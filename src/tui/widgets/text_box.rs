use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::canvas::TextData;
use crate::config::parse_color;
use crate::tui::component::ElementWidget;

/// Canvas text element: aligned both ways inside its box
///
/// `size` has no meaning on a terminal and is ignored.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub data: TextData,
    /// Style used when the text carries no color of its own
    pub style: Style,
}

impl ElementWidget for TextBox {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.data.text.as_deref() else {
            return;
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = match self.data.color.as_deref().and_then(parse_color) {
            Some(color) => self.style.fg(color),
            None => self.style,
        };
        let lines = text.lines().count().max(1).min(u16::MAX as usize) as u16;
        let offset = self.data.valign.offset(area.height, lines);
        let target = Rect::new(area.x, area.y + offset, area.width, area.height - offset);

        Paragraph::new(text)
            .style(style)
            .alignment(self.data.align.into())
            .render(target, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Align, VAlign};
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;
    use ratatui::style::Color;

    fn text_box(text: &str, align: Align, valign: VAlign) -> TextBox {
        TextBox {
            data: TextData {
                text: Some(text.to_string()),
                align,
                valign,
                ..Default::default()
            },
            style: Style::default(),
        }
    }

    #[test]
    fn test_center_middle() {
        let buf = render_widget(&text_box("Hi", Align::Center, VAlign::Middle), 6, 3);
        assert_buffer(&buf, &["", "  Hi", ""]);
    }

    #[test]
    fn test_right_bottom() {
        let buf = render_widget(&text_box("Hi", Align::Right, VAlign::Bottom), 6, 3);
        assert_buffer(&buf, &["", "", "    Hi"]);
    }

    #[test]
    fn test_color_from_text_data() {
        let mut widget = text_box("Hi", Align::Left, VAlign::Top);
        widget.data.color = Some("#ff0000".to_string());
        let buf = render_widget(&widget, 4, 1);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_missing_text_renders_nothing() {
        let widget = TextBox {
            data: TextData::default(),
            style: Style::default(),
        };
        let buf = render_widget(&widget, 4, 1);
        assert_buffer(&buf, &[""]);
    }
}
