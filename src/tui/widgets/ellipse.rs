/// EllipsePreview widget - draws a canvas ellipse element
///
/// The ellipse is drawn with braille dots on a ratatui `Canvas`, placed in
/// the available area with a `QuickPlacement`. Its label is drawn on top
/// with the element's text alignment.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Widget,
    },
};

use crate::canvas::{EllipseData, QuickPlacement};
use crate::config::parse_color;
use crate::tui::component::ElementWidget;

use super::TextBox;

/// Points sampled along the outline
const OUTLINE_SAMPLES: usize = 720;

/// Grid steps per axis used to fill the interior
const FILL_STEPS: usize = 80;

/// Terminal cells are roughly twice as tall as wide
const CELL_ASPECT: u16 = 2;

const MIN_HEIGHT: u16 = 3;

/// Unit ellipse spanning the canvas bounds `[-1, 1]` on both axes
#[derive(Debug, Clone, Copy)]
struct UnitEllipse {
    border: Color,
    fill: Option<Color>,
}

impl Shape for UnitEllipse {
    fn draw(&self, painter: &mut Painter) {
        if let Some(fill) = self.fill {
            for i in 0..=FILL_STEPS {
                for j in 0..=FILL_STEPS {
                    let x = -1.0 + 2.0 * i as f64 / FILL_STEPS as f64;
                    let y = -1.0 + 2.0 * j as f64 / FILL_STEPS as f64;
                    if x * x + y * y < 1.0 {
                        if let Some((px, py)) = painter.get_point(x, y) {
                            painter.paint(px, py, fill);
                        }
                    }
                }
            }
        }

        for i in 0..OUTLINE_SAMPLES {
            let angle = std::f64::consts::TAU * i as f64 / OUTLINE_SAMPLES as f64;
            if let Some((px, py)) = painter.get_point(angle.cos(), angle.sin()) {
                painter.paint(px, py, self.border);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct EllipsePreview {
    pub data: EllipseData,
    pub placement: QuickPlacement,
    /// Color used when the element has no border color
    pub default_border: Color,
}

impl EllipsePreview {
    /// Box the ellipse occupies inside `area`
    ///
    /// The element width is taken in cells; without one the ellipse spans
    /// half of the area.
    pub fn bounds(&self, area: Rect) -> Rect {
        let width = match self.data.width {
            Some(width) if width.is_finite() && width >= 1.0 => width.round().min(f64::from(u16::MAX)) as u16,
            _ => area.width / 2,
        };
        let height = (width / CELL_ASPECT).max(MIN_HEIGHT);
        self.placement.place(area, width, height)
    }
}

impl ElementWidget for EllipsePreview {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let bounds = self.bounds(area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }

        let shape = UnitEllipse {
            border: self
                .data
                .border_color
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(self.default_border),
            fill: self.data.background_color.as_deref().and_then(parse_color),
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| ctx.draw(&shape))
            .render(bounds, buf);

        TextBox {
            data: self.data.text.clone(),
            style: Style::default(),
        }
        .render(bounds, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Align, TextData, VAlign};
    use crate::tui::widgets::testing::*;

    fn preview(width: Option<f64>, placement: QuickPlacement) -> EllipsePreview {
        EllipsePreview {
            data: EllipseData {
                text: TextData {
                    text: Some("E".to_string()),
                    align: Align::Center,
                    valign: VAlign::Middle,
                    ..Default::default()
                },
                border_color: Some("red".to_string()),
                width,
                ..Default::default()
            },
            placement,
            default_border: Color::White,
        }
    }

    #[test]
    fn test_bounds_follow_width_and_placement() {
        let area = Rect::new(0, 0, 40, 20);

        assert_eq!(
            preview(Some(10.0), QuickPlacement::HorizontalCenter).bounds(area),
            Rect::new(15, 7, 10, 5)
        );
        assert_eq!(
            preview(Some(10.0), QuickPlacement::Left).bounds(area),
            Rect::new(0, 7, 10, 5)
        );
        assert_eq!(
            preview(None, QuickPlacement::Top).bounds(area),
            Rect::new(10, 0, 20, 10)
        );
    }

    #[test]
    fn test_bounds_shrink_to_area() {
        let area = Rect::new(0, 0, 8, 4);
        assert_eq!(
            preview(Some(60.0), QuickPlacement::HorizontalCenter).bounds(area),
            Rect::new(0, 0, 8, 4)
        );
    }

    #[test]
    fn test_render_stays_inside_bounds() {
        let widget = preview(Some(10.0), QuickPlacement::HorizontalCenter);
        let buf = render_widget(&widget, 40, 20);
        let bounds = widget.bounds(buf.area);

        let mut drawn = 0;
        for y in 0..20 {
            for x in 0..40 {
                if buf[(x, y)].symbol() != " " {
                    drawn += 1;
                    assert!(
                        bounds.contains(ratatui::layout::Position::new(x, y)),
                        "cell ({}, {}) drawn outside {:?}",
                        x,
                        y,
                        bounds
                    );
                }
            }
        }
        assert!(drawn > 0);
    }

    #[test]
    fn test_render_label_centered() {
        let widget = preview(Some(10.0), QuickPlacement::HorizontalCenter);
        let buf = render_widget(&widget, 40, 20);
        // bounds (15, 7, 10, 5): middle row 9, center column 19 or 20
        let row = buffer_line(&buf, 9);
        assert!(row[..].contains('E'), "label missing from row: {:?}", row);
    }

    #[test]
    fn test_border_color_resolved() {
        let widget = preview(Some(10.0), QuickPlacement::Left);
        let buf = render_widget(&widget, 40, 20);
        let bounds = widget.bounds(buf.area);

        let has_red = (bounds.top()..bounds.bottom()).any(|y| {
            (bounds.left()..bounds.right()).any(|x| buf[(x, y)].fg == Color::Red)
        });
        assert!(has_red);
    }
}
