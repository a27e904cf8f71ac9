use crate::editor::SliderSettings;

use super::components::value_editor::EditorMsg;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - Editor effects (committed value changes)
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A field editor committed a new value (the editor's on_change)
    FieldChanged { index: usize, value: f64 },

    /// Owner-side write of a field value, bypassing the editor
    SetFieldValue { index: usize, value: Option<f64> },

    /// Owner-side replacement of a field's bounds, step and marks
    SetFieldSettings { index: usize, settings: SliderSettings },

    /// Restore every field to its configured value
    ResetFields,

    /// Route a message to one field editor
    Editor { index: usize, msg: EditorMsg },

    // Focus
    FocusNext,
    FocusPrevious,
    FocusField(usize),

    // Pointer
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp,

    // System actions
    Quit,
}

impl Action {
    /// Returns true if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}
