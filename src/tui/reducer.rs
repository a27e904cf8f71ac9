use tracing::debug;

use crate::editor::ValueRange;
use crate::formatting::format_number;

use super::action::Action;
use super::component::Effect;
use super::components::value_editor::EditorMsg;
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// Editor messages and pointer actions need editor state and screen geometry,
/// so the runtime handles those before they reach this function.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::FieldChanged { index, value } => reduce_field_changed(state, index, value),

        Action::SetFieldValue { index, value } => {
            let mut new_state = state;
            if let Some(field) = new_state.fields.get_mut(index) {
                debug!("OWNER: {} set to {:?}", field.name, value);
                field.value = value;
            }
            (new_state, Effect::None)
        }

        Action::SetFieldSettings { index, settings } => {
            let mut new_state = state;
            if let Some(field) = new_state.fields.get_mut(index) {
                field.range = ValueRange::from_settings(&settings);
                debug!("OWNER: {} range now {}..{}", field.name, field.range.min, field.range.max);
            }
            (new_state, Effect::None)
        }

        Action::ResetFields => {
            let mut new_state = state;
            for field in &mut new_state.fields {
                field.value = field.initial;
            }
            new_state
                .system
                .set_status_message("Fields reset to configured values".to_string());
            (new_state, Effect::None)
        }

        Action::FocusNext => {
            let count = state.fields.len();
            if count == 0 {
                return (state, Effect::None);
            }
            let next = (state.ui.focused + 1) % count;
            move_focus(state, next)
        }

        Action::FocusPrevious => {
            let count = state.fields.len();
            if count == 0 {
                return (state, Effect::None);
            }
            let previous = (state.ui.focused + count - 1) % count;
            move_focus(state, previous)
        }

        Action::FocusField(index) => {
            if index >= state.fields.len() || index == state.ui.focused {
                return (state, Effect::None);
            }
            move_focus(state, index)
        }

        Action::Quit => {
            let mut new_state = state;
            new_state.system.should_quit = true;
            (new_state, Effect::None)
        }

        Action::Editor { .. }
        | Action::PointerDown { .. }
        | Action::PointerDrag { .. }
        | Action::PointerUp => (state, Effect::None),
    }
}

fn reduce_field_changed(state: AppState, index: usize, value: f64) -> (AppState, Effect) {
    let mut new_state = state;
    let Some(field) = new_state.fields.get_mut(index) else {
        debug!("CHANGE: ignoring change for unknown field {}", index);
        return (new_state, Effect::None);
    };

    field.value = Some(value);
    field.changes += 1;
    let out_of_range = !field.range.contains(value);
    let message = format!("{} = {}", field.name, format_number(value));
    debug!("CHANGE: {}", message);

    if out_of_range {
        new_state
            .system
            .set_status_error_message(format!("{} (outside range)", message));
    } else {
        new_state.system.set_status_message(message);
    }
    (new_state, Effect::None)
}

/// Move keyboard focus to another field, blurring the current editor
fn move_focus(state: AppState, target: usize) -> (AppState, Effect) {
    let mut new_state = state;
    let previous = new_state.ui.focused;
    new_state.ui.focused = target;
    debug!("FOCUS: field {} -> {}", previous, target);

    let mut effects = Vec::new();
    if previous < new_state.fields.len() {
        effects.push(Effect::Action(Action::Editor {
            index: previous,
            msg: EditorMsg::Blur,
        }));
    }
    effects.push(Effect::Action(Action::Editor {
        index: target,
        msg: EditorMsg::FocusSlider,
    }));
    (new_state, Effect::Batch(effects))
}
