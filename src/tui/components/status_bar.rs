use ratatui::style::{Modifier, Style};

use crate::tui::component::{Component, Element};
use crate::tui::state::AppState;
use crate::tui::widgets::StatusLine;

/// StatusBar component - status message or key hints, plus the change counter
///
/// With no message to show, the hint names the focused handle by its
/// accessibility label.
pub struct StatusBar;

impl StatusBar {
    fn hint(state: &AppState) -> String {
        match state.focused_field() {
            Some(field) => format!(
                "{}: ←/→ adjust  Tab edit  r reset  q quit",
                field.handle_label()
            ),
            None => "q quit".to_string(),
        }
    }
}

impl Component for StatusBar {
    type Props = AppState;
    type State = ();
    type Message = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let theme = &props.system.config.theme;
        Element::widget(StatusLine {
            message: props.system.status_message.clone(),
            is_error: props.system.status_is_error,
            hint: Self::hint(props),
            changes: props.total_changes(),
            text_style: Style::default().fg(theme.text_primary),
            error_style: Style::default()
                .fg(theme.error_fg)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(theme.text_disabled),
        })
    }
}
