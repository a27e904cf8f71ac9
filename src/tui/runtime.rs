use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::measure::TextMeasurer;
use crate::styles::StyleCache;

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::value_editor::{
    BoundedValueEditor, EditorFocus, EditorMsg, EditorProps, EditorState,
};
use super::components::{App, AppProps, EditorView};
use super::layout::{editor_areas, field_height, AppLayout};
use super::reducer::reduce;
use super::state::AppState;

/// Where a pointer press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Track { index: usize, track: Rect },
    Input { index: usize },
}

/// Component runtime - manages component lifecycle and action processing
///
/// The Runtime is responsible for:
/// - Managing the application state (the owner of every field value)
/// - Managing one editor state per field
/// - Dispatching actions through the reducer or to editors
/// - Running the post-render effect pass
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Editor state per field, in field order
    editors: Vec<EditorState>,

    /// The editor component shared by all fields
    editor: BoundedValueEditor,

    /// Memoized slider styles
    styles: StyleCache,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Area of the last rendered frame, used for hit-testing
    viewport: Rect,
}

impl Runtime {
    /// Create a new runtime with initial state and a text measurer
    pub fn new(initial_state: AppState, measurer: Arc<dyn TextMeasurer>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let editor = BoundedValueEditor::new(measurer, initial_state.system.config.input_padding);

        let mut runtime = Self {
            state: initial_state,
            editors: Vec::new(),
            editor,
            styles: StyleCache::new(),
            action_tx,
            action_rx,
            viewport: Rect::default(),
        };
        let editors: Vec<EditorState> = (0..runtime.state.fields.len())
            .map(|index| BoundedValueEditor::init(&runtime.editor_props(index)))
            .collect();
        runtime.editors = editors;
        runtime
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Editor state of one field
    pub fn editor_state(&self, index: usize) -> Option<&EditorState> {
        self.editors.get(index)
    }

    /// Focused view of the focused editor
    pub fn focused_view(&self) -> EditorFocus {
        self.editors
            .get(self.state.ui.focused)
            .map(|editor| editor.focus)
            .unwrap_or_default()
    }

    /// Style computations so far
    pub fn style_computations(&self) -> u64 {
        self.styles.computations()
    }

    /// Props for the editor of field `index`
    ///
    /// Panics if `index` is out of range; callers check first.
    fn editor_props(&mut self, index: usize) -> EditorProps {
        let field = &self.state.fields[index];
        let config = &self.state.system.config;
        let styles = self
            .styles
            .get(&config.theme, true, !field.range.marks.is_empty());

        EditorProps {
            label: field.name.clone(),
            value: field.value,
            range: field.range.clone(),
            on_change: Arc::new(move |value| Action::FieldChanged { index, value }),
            styles,
            focused: self.state.ui.focused == index,
            policy: config.commit_policy,
        }
    }

    /// Dispatch an action
    ///
    /// Editor and pointer actions go to the editors; everything else runs
    /// through the reducer. Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        match action {
            Action::Editor { index, msg } => self.dispatch_editor(index, msg),
            Action::PointerDown { column, row } => self.pointer_down(column, row),
            Action::PointerDrag { column, .. } => self.pointer_drag(column),
            Action::PointerUp => {
                if let Some(index) = self.state.ui.dragging.take() {
                    debug!("POINTER: released field {}", index);
                }
            }
            action => {
                let state = std::mem::take(&mut self.state);
                let (new_state, effect) = reduce(state, action);
                self.state = new_state;
                self.execute_effect(effect);
            }
        }
    }

    fn dispatch_editor(&mut self, index: usize, msg: EditorMsg) {
        if index >= self.editors.len() {
            debug!("ACTION: no editor {} for {:?}", index, msg);
            return;
        }
        let props = self.editor_props(index);
        let effect = self.editor.update(&props, msg, &mut self.editors[index]);
        self.execute_effect(effect);
    }

    /// Queue actions produced by an effect
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                trace!("EFFECT: queueing {:?}", action);
                let _ = self.action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    self.execute_effect(effect);
                }
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Post-render pass
    ///
    /// Applies queued actions first so owner values already include every
    /// reported change, then lets each editor adopt owner values and resize
    /// its text field. Returns true when another render is needed.
    pub fn run_effects(&mut self) -> bool {
        let mut changed = self.process_actions() > 0;
        for index in 0..self.editors.len() {
            let props = self.editor_props(index);
            changed |= self.editor.after_render(&props, &mut self.editors[index]);
        }
        changed
    }

    /// Build the virtual element tree from current state
    pub fn build(&mut self) -> Element {
        let editors: Vec<EditorView> = (0..self.editors.len())
            .map(|index| {
                let props = self.editor_props(index);
                EditorView {
                    element: self.editor.view(&props, &self.editors[index]),
                    height: field_height(&props.styles),
                }
            })
            .collect();

        let props = AppProps {
            state: self.state.clone(),
            editors,
        };
        App.view(&props, &())
    }

    /// Record the area the last frame was drawn in
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Editor rows as laid out in the last frame
    fn field_rows(&mut self) -> Vec<Rect> {
        let heights: Vec<u16> = (0..self.editors.len())
            .map(|index| field_height(&self.editor_props(index).styles))
            .collect();
        AppLayout::compute(self.viewport, &heights).fields
    }

    fn hit_test(&mut self, column: u16, row: u16) -> Option<Hit> {
        let position = ratatui::layout::Position::new(column, row);
        let rows = self.field_rows();

        for (index, area) in rows.into_iter().enumerate() {
            let styles = self.editor_props(index).styles;
            let areas = editor_areas(area, self.editors[index].measured_input_width, &styles);
            if areas.track.contains(position) {
                return Some(Hit::Track {
                    index,
                    track: areas.track,
                });
            }
            if areas.input.contains(position) {
                return Some(Hit::Input { index });
            }
        }
        None
    }

    /// Move focus to a field and settle the resulting blur/focus messages
    fn focus_field(&mut self, index: usize) {
        self.dispatch(Action::FocusField(index));
        self.process_actions();
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        match self.hit_test(column, row) {
            Some(Hit::Track { index, track }) => {
                debug!("POINTER: pressed track of field {} at column {}", index, column);
                self.focus_field(index);
                self.state.ui.dragging = Some(index);
                self.dispatch_editor(index, EditorMsg::PointerAt { column, track });
            }
            Some(Hit::Input { index }) => {
                debug!("POINTER: pressed text field of field {}", index);
                self.focus_field(index);
                self.dispatch_editor(index, EditorMsg::FocusInput);
            }
            None => {}
        }
    }

    fn pointer_drag(&mut self, column: u16) {
        let Some(index) = self.state.ui.dragging else {
            return;
        };
        let rows = self.field_rows();
        let Some(area) = rows.get(index).copied() else {
            return;
        };
        let styles = self.editor_props(index).styles;
        let track = editor_areas(area, self.editors[index].measured_input_width, &styles).track;
        self.dispatch_editor(index, EditorMsg::PointerAt { column, track });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{config_with_fields, field, runtime_with};

    #[test]
    fn test_new_initializes_one_editor_per_field() {
        let runtime = runtime_with(config_with_fields(vec![
            field("A", Some(3.0), 0.0, 10.0, None),
            field("B", None, 2.0, 10.0, None),
        ]));

        assert_eq!(runtime.editor_state(0).map(|e| e.current_value), Some(3.0));
        assert_eq!(runtime.editor_state(1).map(|e| e.current_value), Some(2.0));
        assert!(runtime.editor_state(2).is_none());
    }

    #[test]
    fn test_editor_change_reaches_owner_after_processing() {
        let mut runtime = runtime_with(config_with_fields(vec![field("A", Some(3.0), 0.0, 10.0, None)]));

        runtime.dispatch(Action::Editor {
            index: 0,
            msg: EditorMsg::DragTo(7.0.into()),
        });
        assert_eq!(runtime.state().fields[0].value, Some(3.0));

        assert_eq!(runtime.process_actions(), 1);
        assert_eq!(runtime.state().fields[0].value, Some(7.0));
        assert_eq!(runtime.state().fields[0].changes, 1);
    }

    #[test]
    fn test_run_effects_does_not_revert_pending_change() {
        let mut runtime = runtime_with(config_with_fields(vec![field("A", Some(3.0), 0.0, 10.0, None)]));

        runtime.dispatch(Action::Editor {
            index: 0,
            msg: EditorMsg::DragTo(7.0.into()),
        });
        runtime.run_effects();

        assert_eq!(runtime.editor_state(0).map(|e| e.current_value), Some(7.0));
        assert_eq!(runtime.state().fields[0].value, Some(7.0));
    }

    #[test]
    fn test_action_sender_feeds_queue() {
        let mut runtime = runtime_with(config_with_fields(vec![field("A", Some(3.0), 0.0, 10.0, None)]));

        let _ = runtime.action_sender().send(Action::Quit);
        assert_eq!(runtime.process_actions(), 1);
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_unknown_editor_index_is_ignored() {
        let mut runtime = runtime_with(config_with_fields(vec![field("A", Some(3.0), 0.0, 10.0, None)]));
        runtime.dispatch(Action::Editor {
            index: 5,
            msg: EditorMsg::Commit,
        });
        assert_eq!(runtime.process_actions(), 0);
    }
}
