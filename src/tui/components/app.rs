use ratatui::style::{Color, Modifier, Style};

use crate::tui::component::{vertical, Component, Element};
use crate::tui::layout::app_constraints;
use crate::tui::state::AppState;
use crate::tui::widgets::{EllipsePreview, TextBox};

use super::StatusBar;

/// One rendered editor and the rows it needs
#[derive(Clone)]
pub struct EditorView {
    pub element: Element,
    pub height: u16,
}

#[derive(Clone)]
pub struct AppProps {
    pub state: AppState,
    /// Editor elements in field order, built by the runtime
    pub editors: Vec<EditorView>,
}

/// Root App component
///
/// Title, one row per field editor, the ellipse preview and the status bar,
/// stacked with the constraints from `layout::app_constraints`.
pub struct App;

impl Component for App {
    type Props = AppProps;
    type State = ();
    type Message = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let heights: Vec<u16> = props.editors.iter().map(|e| e.height).collect();

        let mut children = Vec::with_capacity(props.editors.len() + 3);
        children.push(self.render_title(&props.state));
        children.extend(props.editors.iter().map(|e| e.element.clone()));
        children.push(self.render_preview(&props.state));
        children.push(StatusBar.view(&props.state, &()));

        vertical(app_constraints(&heights), children)
    }
}

impl App {
    fn render_title(&self, state: &AppState) -> Element {
        let config = &state.system.config;
        let data = config
            .title
            .resolve(|text| Some(text.clone()), |color| Some(color.clone()));
        Element::widget(TextBox {
            data,
            style: Style::default()
                .fg(config.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        })
    }

    /// Ellipse preview; its width follows the bound field
    fn render_preview(&self, state: &AppState) -> Element {
        let preview = &state.system.config.preview;
        let mut data = preview
            .ellipse
            .resolve(|text| Some(text.clone()), |color| Some(color.clone()));
        if let Some(value) = state.bound_preview_value() {
            data.width = Some(value);
        }
        Element::widget(EllipsePreview {
            data,
            placement: preview.placement,
            default_border: Color::White,
        })
    }
}
