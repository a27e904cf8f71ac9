use ratatui::{
    buffer::Buffer,
    layout::{Direction, Layout, Rect},
};

use super::component::{ContainerLayout, Element};

/// Renders virtual element tree to ratatui buffer
///
/// ratatui already diffs buffers between frames, so every frame renders the
/// whole tree.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&mut self, element: &Element, area: Rect, buf: &mut Buffer) {
        match element {
            Element::Widget(widget) => widget.render(area, buf),

            Element::Container { children, layout } => {
                let chunks = split(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render(child, *chunk, buf);
                }
            }

            Element::Fragment(children) => {
                for child in children {
                    self.render(child, area, buf);
                }
            }

            Element::None => {}
        }
    }
}

/// Split an area according to a container layout
///
/// Shared by rendering and pointer hit-testing so both agree on geometry.
pub fn split(layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
    let (direction, constraints) = match layout {
        ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
        ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
    };

    Layout::default()
        .direction(direction)
        .constraints(constraints.iter().map(|c| ratatui::layout::Constraint::from(*c)))
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::{vertical, Constraint, ElementWidget};
    use crate::tui::testing::assert_buffer;
    use ratatui::style::Style;

    #[derive(Clone)]
    struct Label(&'static str);

    impl ElementWidget for Label {
        fn render(&self, area: Rect, buf: &mut Buffer) {
            if area.height > 0 {
                buf.set_string(area.x, area.y, self.0, Style::default());
            }
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_render_vertical_container() {
        let tree = vertical(
            vec![Constraint::Length(1), Constraint::Length(1)],
            vec![Element::widget(Label("top")), Element::widget(Label("bottom"))],
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));

        Renderer::new().render(&tree, buf.area, &mut buf);

        assert_buffer(&buf, &["top", "bottom"]);
    }

    #[test]
    fn test_render_fragment_shares_area() {
        let tree = Element::Fragment(vec![
            Element::widget(Label("aaaa")),
            Element::widget(Label("bb")),
        ]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));

        Renderer::new().render(&tree, buf.area, &mut buf);

        assert_buffer(&buf, &["bbaa"]);
    }

    #[test]
    fn test_split_matches_constraints() {
        let layout = ContainerLayout::Vertical(vec![
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let chunks = split(&layout, Rect::new(0, 0, 20, 10));

        assert_eq!(chunks[0], Rect::new(0, 0, 20, 2));
        assert_eq!(chunks[1], Rect::new(0, 2, 20, 7));
        assert_eq!(chunks[2], Rect::new(0, 9, 20, 1));
    }
}
