//! Bounded numeric value editor.
//!
//! One value shown two ways: a slider track with a draggable handle and a
//! numeric text field next to it. The editor keeps its own copy of the value
//! so both views update immediately, reports every committed change through
//! the owner's `on_change` callback, and adopts new owner values in the
//! post-render pass.

use std::sync::Arc;

use ratatui::layout::Rect;
use tracing::{debug, trace};

use crate::editor::input::is_numeric_char;
use crate::editor::{
    commit_value, input_width, same_value, CommitPolicy, DragPosition, LayoutKey,
    NumberInputState, SliderKey, ValueRange, DEFAULT_INPUT_WIDTH, INPUT_PADDING,
};
use crate::measure::TextMeasurer;
use crate::styles::SliderStyles;
use crate::tui::action::Action;
use crate::tui::component::{Component, Effect, Element};
use crate::tui::widgets::{value_at_column, EditorRow};

/// Owner callback invoked with each committed value
///
/// The returned action is the owner's reaction; the runtime queues it.
pub type ChangeHandler = Arc<dyn Fn(f64) -> Action + Send + Sync>;

#[derive(Clone)]
pub struct EditorProps {
    pub label: String,
    /// Owner value; `None` leaves the editor's own value alone
    pub value: Option<f64>,
    pub range: ValueRange,
    pub on_change: ChangeHandler,
    pub styles: SliderStyles,
    pub focused: bool,
    pub policy: CommitPolicy,
}

/// Which of the two views receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Slider,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// The value both views display
    pub current_value: f64,
    /// Text field width in cells
    pub measured_input_width: u16,
    /// `(max, step)` the width was last computed for
    pub layout_key: Option<LayoutKey>,
    pub input: NumberInputState,
    pub focus: EditorFocus,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            current_value: 0.0,
            measured_input_width: DEFAULT_INPUT_WIDTH,
            layout_key: None,
            input: NumberInputState::default(),
            focus: EditorFocus::default(),
        }
    }
}

impl EditorState {
    /// Text the field currently shows
    pub fn display_text(&self) -> String {
        self.input.display(self.current_value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// The drag control moved to a new position
    DragTo(DragPosition),
    /// Keyboard movement of the handle
    Key(SliderKey),
    /// Pointer press or drag at a column of the track
    PointerAt { column: u16, track: Rect },
    TypeChar(char),
    Paste(String),
    Backspace,
    /// Commit the text field (Enter)
    Commit,
    /// Drop the text field edit (Esc)
    Cancel,
    FocusSlider,
    FocusInput,
    /// Focus left this editor; commits a pending edit
    Blur,
}

/// The slider + text field component
pub struct BoundedValueEditor {
    measurer: Arc<dyn TextMeasurer>,
    input_padding: u16,
}

impl BoundedValueEditor {
    pub fn new(measurer: Arc<dyn TextMeasurer>, input_padding: u16) -> Self {
        Self {
            measurer,
            input_padding,
        }
    }

    /// Set the value from the drag control and report it
    fn drag_to(&self, props: &EditorProps, position: DragPosition, state: &mut EditorState) -> Effect {
        let Some(value) = position.primary() else {
            trace!("EDITOR: {} ignoring empty drag position", props.label);
            return Effect::None;
        };
        state.input.cancel();
        state.current_value = value;
        debug!("EDITOR: {} dragged to {}", props.label, value);
        Effect::Action((props.on_change)(value))
    }

    /// Move the handle to a computed position, reporting only real moves
    fn move_handle(&self, props: &EditorProps, target: f64, state: &mut EditorState) -> Effect {
        state.focus = EditorFocus::Slider;
        if same_value(target, state.current_value) {
            state.input.cancel();
            return Effect::None;
        }
        self.drag_to(props, DragPosition::Single(target), state)
    }

    fn commit_input(&self, props: &EditorProps, state: &mut EditorState) -> Effect {
        let Some(text) = state.input.take_commit() else {
            return Effect::None;
        };
        let value = props.policy.apply(commit_value(&text), &props.range);
        debug!("EDITOR: {} committed '{}' as {}", props.label, text, value);
        state.current_value = value;
        Effect::Action((props.on_change)(value))
    }

    /// Recompute the text field width when `(max, step)` changed
    fn sync_input_width(&self, props: &EditorProps, state: &mut EditorState) -> bool {
        let key = LayoutKey::new(props.range.max, props.range.step);
        if state.layout_key == Some(key) {
            return false;
        }
        state.layout_key = Some(key);

        match input_width(
            self.measurer.as_ref(),
            props.range.max,
            props.range.step,
            self.input_padding,
        ) {
            Some(width) if width != state.measured_input_width => {
                debug!(
                    "EDITOR: {} input width {} -> {}",
                    props.label, state.measured_input_width, width
                );
                state.measured_input_width = width;
                true
            }
            Some(_) => false,
            None => {
                trace!("EDITOR: {} text unmeasurable, keeping width", props.label);
                false
            }
        }
    }
}

impl Default for BoundedValueEditor {
    fn default() -> Self {
        Self::new(Arc::new(crate::measure::CellMeasurer), INPUT_PADDING)
    }
}

impl Component for BoundedValueEditor {
    type Props = EditorProps;
    type State = EditorState;
    type Message = EditorMsg;

    fn init(props: &Self::Props) -> Self::State {
        let current_value = props
            .value
            .map(|value| props.policy.apply(value, &props.range))
            .unwrap_or(props.range.min);
        EditorState {
            current_value,
            ..EditorState::default()
        }
    }

    fn update(&mut self, props: &Self::Props, msg: Self::Message, state: &mut Self::State) -> Effect {
        match msg {
            EditorMsg::DragTo(position) => self.drag_to(props, position, state),

            EditorMsg::Key(key) => {
                let target = props.range.nudge(state.current_value, key);
                self.move_handle(props, target, state)
            }

            EditorMsg::PointerAt { column, track } => {
                let target = value_at_column(&props.range, track, column);
                self.move_handle(props, target, state)
            }

            EditorMsg::TypeChar(c) => {
                if is_numeric_char(c) {
                    state.focus = EditorFocus::Input;
                    state.input.type_char(c, state.current_value);
                }
                Effect::None
            }

            EditorMsg::Paste(text) => {
                state.focus = EditorFocus::Input;
                state.input.paste(&text, state.current_value);
                Effect::None
            }

            EditorMsg::Backspace => {
                state.focus = EditorFocus::Input;
                state.input.backspace(state.current_value);
                Effect::None
            }

            EditorMsg::Commit => self.commit_input(props, state),

            EditorMsg::Cancel => {
                state.input.cancel();
                Effect::None
            }

            EditorMsg::FocusInput => {
                state.focus = EditorFocus::Input;
                Effect::None
            }

            EditorMsg::FocusSlider | EditorMsg::Blur => {
                state.focus = EditorFocus::Slider;
                self.commit_input(props, state)
            }
        }
    }

    fn view(&self, props: &Self::Props, state: &Self::State) -> Element {
        Element::widget(EditorRow {
            label: props.label.clone(),
            range: props.range.clone(),
            value: state.current_value,
            text: state.display_text(),
            editing: state.input.is_editing(),
            focus: props.focused.then_some(state.focus),
            styles: props.styles.clone(),
            input_width: state.measured_input_width,
        })
    }

    fn after_render(&mut self, props: &Self::Props, state: &mut Self::State) -> bool {
        let mut changed = false;

        if let Some(value) = props.value {
            let value = props.policy.apply(value, &props.range);
            if !same_value(value, state.current_value) {
                debug!(
                    "EDITOR: {} adopting owner value {} (was {})",
                    props.label, value, state.current_value
                );
                state.current_value = value;
                state.input.cancel();
                changed = true;
            }
        }

        changed |= self.sync_input_width(props, state);
        changed
    }
}
