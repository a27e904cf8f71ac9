//! Bounded numeric value editing.
//!
//! Framework-independent pieces of the slider editor: the value range and
//! its quantization, the text field buffer, the commit policy and the width
//! heuristic. The terminal component that ties them together lives in
//! `crate::tui::components::value_editor`.

pub mod input;
pub mod policy;
pub mod range;
pub mod width;

pub use input::{commit_value, parse_number, NumberInputState};
pub use policy::CommitPolicy;
pub use range::{Mark, Marks, SliderKey, SliderSettings, ValueRange};
pub use width::{input_width, LayoutKey, DEFAULT_INPUT_WIDTH, INPUT_PADDING};

/// Position reported by the drag control
///
/// Range-capable controls report several handles; the editor follows the
/// first one.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPosition {
    Single(f64),
    Multi(Vec<f64>),
}

impl DragPosition {
    pub fn primary(&self) -> Option<f64> {
        match self {
            DragPosition::Single(value) => Some(*value),
            DragPosition::Multi(values) => values.first().copied(),
        }
    }
}

impl From<f64> for DragPosition {
    fn from(value: f64) -> Self {
        DragPosition::Single(value)
    }
}

impl From<Vec<f64>> for DragPosition {
    fn from(values: Vec<f64>) -> Self {
        DragPosition::Multi(values)
    }
}

/// Equality that treats NaN as equal to itself
///
/// Used when comparing an owner-supplied value with the editor's value so a
/// NaN from the owner cannot trigger an update on every frame.
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
