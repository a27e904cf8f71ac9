/// Keyboard and mouse event to action mapping
///
/// This module converts crossterm events into Actions. What a key does
/// depends on which view of the focused editor has keyboard focus.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::editor::input::is_numeric_char;
use crate::editor::SliderKey;

use super::action::Action;
use super::components::value_editor::{EditorFocus, EditorMsg};
use super::state::AppState;

/// Wrap a message for the focused editor
fn to_focused(state: &AppState, msg: EditorMsg) -> Option<Action> {
    state.focused_field()?;
    Some(Action::Editor {
        index: state.ui.focused,
        msg,
    })
}

fn slider_key(code: KeyCode) -> Option<SliderKey> {
    match code {
        KeyCode::Left => Some(SliderKey::Decrease),
        KeyCode::Right => Some(SliderKey::Increase),
        KeyCode::PageUp => Some(SliderKey::PageUp),
        KeyCode::PageDown => Some(SliderKey::PageDown),
        KeyCode::Home => Some(SliderKey::Home),
        KeyCode::End => Some(SliderKey::End),
        _ => None,
    }
}

/// Handle keys while the text field has focus
fn handle_input_keys(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) if is_numeric_char(c) => to_focused(state, EditorMsg::TypeChar(c)),
        KeyCode::Backspace => to_focused(state, EditorMsg::Backspace),
        KeyCode::Enter => to_focused(state, EditorMsg::Commit),
        KeyCode::Esc => to_focused(state, EditorMsg::Cancel),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => to_focused(state, EditorMsg::FocusSlider),
        _ => None,
    }
}

/// Handle keys while the slider has focus
fn handle_slider_keys(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ResetFields),
        KeyCode::Char(c) if is_numeric_char(c) => to_focused(state, EditorMsg::TypeChar(c)),
        KeyCode::Backspace => to_focused(state, EditorMsg::Backspace),
        KeyCode::Tab | KeyCode::Enter => to_focused(state, EditorMsg::FocusInput),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        _ => None,
    }
}

/// Convert a key event to an action
///
/// `focus` is the focused view of the focused editor.
pub fn key_to_action(key: KeyEvent, state: &AppState, focus: EditorFocus) -> Option<Action> {
    trace!("KEY: {:?} with {:?} focus", key, focus);

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => return Some(Action::FocusPrevious),
        KeyCode::Down => return Some(Action::FocusNext),
        code => {
            if let Some(slider_key) = slider_key(code) {
                return to_focused(state, EditorMsg::Key(slider_key));
            }
        }
    }

    match focus {
        EditorFocus::Input => handle_input_keys(key, state),
        EditorFocus::Slider => handle_slider_keys(key, state),
    }
}

/// Convert a mouse event to an action
pub fn mouse_to_action(event: MouseEvent) -> Option<Action> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Action::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::PointerUp),
        _ => None,
    }
}

/// Convert pasted text to an action for the focused editor
pub fn paste_to_action(text: String, state: &AppState) -> Option<Action> {
    to_focused(state, EditorMsg::Paste(text))
}
