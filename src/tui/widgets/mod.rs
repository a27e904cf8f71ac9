/// Widgets for the options panel
///
/// Widgets carry already-resolved data and styles and draw straight into a
/// ratatui `Buffer` through `ElementWidget`. They hold no interaction state;
/// that lives in components.

#[cfg(test)]
pub mod testing;

pub mod editor_row;
pub use editor_row::EditorRow;

pub mod ellipse;
pub use ellipse::EllipsePreview;

pub mod marks_row;
pub use marks_row::MarksRow;

pub mod number_input;
pub use number_input::NumberInput;

pub mod slider_track;
pub use slider_track::{column_for_value, value_at_column, SliderTrack};

pub mod status_line;
pub use status_line::StatusLine;

pub mod text_box;
pub use text_box::TextBox;
