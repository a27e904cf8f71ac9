use crate::config::{Config, FieldConfig};
use crate::editor::ValueRange;

/// Root application state - single source of truth
///
/// The application is the external owner of every field value. Editors keep
/// their own copy (see `EditorState`) and report committed changes back
/// through actions.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Field values owned by the panel
    pub fields: Vec<FieldState>,

    /// Focus and pointer state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub name: String,
    pub range: ValueRange,
    /// Owner value; `None` lets the editor start from the range minimum
    pub value: Option<f64>,
    /// Value restored by a reset
    pub initial: Option<f64>,
    /// Committed changes received for this field
    pub changes: u32,
}

impl FieldState {
    pub fn from_config(field: &FieldConfig) -> Self {
        Self {
            name: field.name.clone(),
            range: ValueRange::from_settings(&field.settings),
            value: field.value,
            initial: field.value,
            changes: 0,
        }
    }

    /// Label announced for the drag handle
    pub fn handle_label(&self) -> &str {
        self.range.aria_label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the field with keyboard focus
    pub focused: usize,
    /// Field whose track is being dragged with the pointer
    pub dragging: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let fields = config.fields.iter().map(FieldState::from_config).collect();
        Self {
            fields,
            ui: UiState::default(),
            system: SystemState {
                config,
                ..Default::default()
            },
        }
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.ui.focused)
    }

    /// Value of the field the preview is bound to
    pub fn bound_preview_value(&self) -> Option<f64> {
        let bind = self.system.config.preview.bind.as_ref()?;
        let field = self.fields.iter().find(|f| &f.name == bind)?;
        Some(field.value.unwrap_or(field.range.min))
    }

    pub fn total_changes(&self) -> u32 {
        self.fields.iter().map(|f| f.changes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{config_with_fields, field};

    #[test]
    fn test_from_config_builds_fields() {
        let state = AppState::from_config(Config::default());

        assert_eq!(state.fields.len(), 5);
        assert_eq!(state.fields[0].name, "Opacity");
        assert_eq!(state.fields[0].value, Some(0.8));
        assert_eq!(state.fields[0].initial, Some(0.8));
        assert_eq!(state.ui.focused, 0);
    }

    #[test]
    fn test_handle_label_prefers_aria_label() {
        let state = AppState::from_config(Config::default());
        assert_eq!(state.fields[1].handle_label(), "Ellipse width");
        assert_eq!(state.fields[0].handle_label(), "Opacity");
    }

    #[test]
    fn test_bound_preview_value() {
        let state = AppState::from_config(Config::default());
        assert_eq!(state.bound_preview_value(), Some(24.0));

        let unbound = AppState::from_config(config_with_fields(vec![field(
            "Size",
            None,
            1.0,
            10.0,
            None,
        )]));
        assert_eq!(unbound.bound_preview_value(), None);
    }

    #[test]
    fn test_status_messages() {
        let mut system = SystemState::default();
        system.set_status_error_message("bad".to_string());
        assert!(system.status_is_error);
        system.set_status_message("ok".to_string());
        assert!(!system.status_is_error);
        assert_eq!(system.status_message.as_deref(), Some("ok"));
    }
}
