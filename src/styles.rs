use ratatui::style::{Modifier, Style};

use crate::config::ThemeConfig;
use crate::memo::Memo;

/// Cells between the drag control and the text field in horizontal layout
const HORIZONTAL_INPUT_GAP: u16 = 3;

/// Resolved styles for one slider editor
///
/// Components receive this instead of a theme, so they stay theme-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderStyles {
    pub rail: Style,
    pub track: Style,
    pub handle: Style,
    pub handle_focused: Style,
    pub dot: Style,
    pub mark_text: Style,
    pub mark_text_active: Style,
    pub label: Style,
    pub label_focused: Style,
    pub input: Style,
    pub input_focused: Style,
    pub input_editing: Style,
    /// Cells between the track and the text field
    pub input_gap: u16,
    /// Rows below the track, used for mark labels
    pub padding_bottom: u16,
}

/// Compute slider styles from an explicit theme
pub fn slider_styles(theme: &ThemeConfig, is_horizontal: bool, has_marks: bool) -> SliderStyles {
    let primary = theme.primary;
    let unfocused = theme.unfocused_primary();

    SliderStyles {
        rail: Style::default().fg(theme.rail),
        track: Style::default().fg(unfocused),
        handle: Style::default().fg(unfocused),
        handle_focused: Style::default().fg(primary).add_modifier(Modifier::BOLD),
        dot: Style::default().fg(theme.text_primary),
        mark_text: Style::default().fg(theme.text_disabled),
        mark_text_active: Style::default().fg(theme.text_primary),
        label: Style::default().fg(theme.text_primary),
        label_focused: Style::default().fg(primary).add_modifier(Modifier::BOLD),
        input: Style::default().fg(theme.text_primary),
        input_focused: Style::default().fg(primary),
        input_editing: Style::default()
            .fg(primary)
            .add_modifier(Modifier::UNDERLINED),
        input_gap: if is_horizontal { HORIZONTAL_INPUT_GAP } else { 0 },
        padding_bottom: if is_horizontal && has_marks { 1 } else { 0 },
    }
}

/// Memoized style computation keyed on the most recent arguments
pub struct StyleCache {
    memo: Memo<(ThemeConfig, bool, bool), SliderStyles>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self {
            memo: Memo::memoize_one(),
        }
    }

    pub fn get(&mut self, theme: &ThemeConfig, is_horizontal: bool, has_marks: bool) -> SliderStyles {
        self.memo
            .get_or_compute((theme.clone(), is_horizontal, has_marks), |(theme, h, m)| {
                slider_styles(theme, *h, *m)
            })
    }

    /// Number of times styles were actually computed
    pub fn computations(&self) -> u64 {
        self.memo.misses()
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new()
    }
}
