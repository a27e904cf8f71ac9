/// Screen geometry for the options panel
///
/// Rendering and pointer hit-testing both derive their rectangles from the
/// functions here, so a click always lands on what was drawn.
use ratatui::layout::Rect;

use crate::styles::SliderStyles;

use super::component::{Constraint, ContainerLayout};
use super::renderer::split;

/// Rows used by the title line
pub const TITLE_HEIGHT: u16 = 2;

/// Rows used by the status bar
pub const STATUS_HEIGHT: u16 = 1;

/// Columns kept free on each side of an editor row
pub const FIELD_MARGIN: u16 = 1;

const LABEL_HEIGHT: u16 = 1;
const TRACK_HEIGHT: u16 = 1;
const FIELD_SPACING: u16 = 1;

/// Rows one editor occupies: label, track, mark labels, spacing
pub fn field_height(styles: &SliderStyles) -> u16 {
    LABEL_HEIGHT + TRACK_HEIGHT + styles.padding_bottom + FIELD_SPACING
}

/// Vertical constraints of the whole screen
pub fn app_constraints(field_heights: &[u16]) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(field_heights.len() + 3);
    constraints.push(Constraint::Length(TITLE_HEIGHT));
    constraints.extend(field_heights.iter().map(|h| Constraint::Length(*h)));
    constraints.push(Constraint::Min(0)); // Preview takes what is left
    constraints.push(Constraint::Length(STATUS_HEIGHT));
    constraints
}

/// Rectangles of the top-level screen regions
#[derive(Debug, Clone, PartialEq)]
pub struct AppLayout {
    pub title: Rect,
    pub fields: Vec<Rect>,
    pub preview: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect, field_heights: &[u16]) -> Self {
        let chunks = split(&ContainerLayout::Vertical(app_constraints(field_heights)), area);
        let count = field_heights.len();
        Self {
            title: chunks[0],
            fields: chunks[1..=count].to_vec(),
            preview: chunks[count + 1],
            status: chunks[count + 2],
        }
    }
}

/// Rectangles inside one editor row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorAreas {
    pub label: Rect,
    pub track: Rect,
    pub marks: Rect,
    pub input: Rect,
}

/// Split an editor row into label, track, mark labels and text field
///
/// The text field sits right of the track, separated by the style's gap.
/// Rows that do not fit in `area` come back with zero height.
pub fn editor_areas(area: Rect, input_width: u16, styles: &SliderStyles) -> EditorAreas {
    let x = area.x.saturating_add(FIELD_MARGIN).min(area.right());
    let width = area.width.saturating_sub(FIELD_MARGIN * 2);

    let input_width = input_width.min(width);
    let track_width = width
        .saturating_sub(input_width)
        .saturating_sub(styles.input_gap);

    let label_row = row(area, 0, LABEL_HEIGHT);
    let track_row = row(area, LABEL_HEIGHT, TRACK_HEIGHT);
    let marks_row = row(area, LABEL_HEIGHT + TRACK_HEIGHT, styles.padding_bottom);

    EditorAreas {
        label: Rect::new(x, label_row.0, width, label_row.1),
        track: Rect::new(x, track_row.0, track_width, track_row.1),
        marks: Rect::new(x, marks_row.0, track_width, marks_row.1),
        input: Rect::new(x + width - input_width, track_row.0, input_width, track_row.1),
    }
}

/// `(y, height)` of a band starting `offset` rows into `area`, clipped to it
fn row(area: Rect, offset: u16, height: u16) -> (u16, u16) {
    let y = area.y.saturating_add(offset).min(area.bottom());
    let height = height.min(area.bottom() - y);
    (y, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::styles::slider_styles;

    #[test]
    fn test_field_height_includes_marks_row() {
        let theme = ThemeConfig::default();
        assert_eq!(field_height(&slider_styles(&theme, true, true)), 4);
        assert_eq!(field_height(&slider_styles(&theme, true, false)), 3);
    }

    #[test]
    fn test_app_layout_stacks_regions() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), &[4, 4]);

        assert_eq!(layout.title, Rect::new(0, 0, 80, 2));
        assert_eq!(layout.fields, vec![Rect::new(0, 2, 80, 4), Rect::new(0, 6, 80, 4)]);
        assert_eq!(layout.preview, Rect::new(0, 10, 80, 13));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_app_layout_without_fields() {
        let layout = AppLayout::compute(Rect::new(0, 0, 40, 10), &[]);
        assert!(layout.fields.is_empty());
        assert_eq!(layout.preview, Rect::new(0, 2, 40, 7));
    }

    #[test]
    fn test_editor_areas_horizontal() {
        let styles = slider_styles(&ThemeConfig::default(), true, true);
        let areas = editor_areas(Rect::new(0, 5, 40, 4), 9, &styles);

        assert_eq!(areas.label, Rect::new(1, 5, 38, 1));
        assert_eq!(areas.track, Rect::new(1, 6, 26, 1));
        assert_eq!(areas.input, Rect::new(30, 6, 9, 1));
        assert_eq!(areas.marks, Rect::new(1, 7, 26, 1));
    }

    #[test]
    fn test_editor_areas_narrow_row() {
        let styles = slider_styles(&ThemeConfig::default(), true, true);
        let areas = editor_areas(Rect::new(0, 0, 8, 4), 12, &styles);

        assert_eq!(areas.input.width, 6);
        assert_eq!(areas.track.width, 0);
    }

    #[test]
    fn test_editor_areas_clip_short_row() {
        let styles = slider_styles(&ThemeConfig::default(), true, true);
        let areas = editor_areas(Rect::new(0, 0, 40, 1), 9, &styles);

        assert_eq!(areas.label.height, 1);
        assert_eq!(areas.track.height, 0);
        assert_eq!(areas.marks.height, 0);
    }
}
