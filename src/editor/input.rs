use crate::formatting::format_number;

/// Parse committed text as a finite number
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Value a text-field commit produces: the parsed number, or 0 when the text
/// is not a finite number
pub fn commit_value(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Characters the text field accepts from typing
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

/// Editing buffer of the numeric text field
///
/// While not editing, the field shows the editor's current value. Editing
/// starts on the first keystroke and lasts until the text is committed or
/// cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberInputState {
    original: String,
    buffer: Option<String>,
}

impl NumberInputState {
    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Whether the buffer differs from the text the edit started from
    pub fn is_dirty(&self) -> bool {
        match &self.buffer {
            Some(buffer) => *buffer != self.original,
            None => false,
        }
    }

    /// Text to show for the given current value
    pub fn display(&self, current: f64) -> String {
        match &self.buffer {
            Some(buffer) => buffer.clone(),
            None => format_number(current),
        }
    }

    /// Type a character; the first keystroke replaces the shown value
    pub fn type_char(&mut self, c: char, current: f64) {
        match &mut self.buffer {
            Some(buffer) => buffer.push(c),
            None => {
                self.original = format_number(current);
                self.buffer = Some(c.to_string());
            }
        }
    }

    /// Insert pasted text as-is
    pub fn paste(&mut self, text: &str, current: f64) {
        match &mut self.buffer {
            Some(buffer) => buffer.push_str(text),
            None => {
                self.original = format_number(current);
                self.buffer = Some(text.to_string());
            }
        }
    }

    /// Delete the last character, starting an edit from the shown value
    pub fn backspace(&mut self, current: f64) {
        let buffer = self.buffer.get_or_insert_with(|| {
            let text = format_number(current);
            self.original = text.clone();
            text
        });
        buffer.pop();
    }

    /// End the edit, returning the text if it changed
    pub fn take_commit(&mut self) -> Option<String> {
        let dirty = self.is_dirty();
        let buffer = self.buffer.take();
        self.original.clear();
        if dirty {
            buffer
        } else {
            None
        }
    }

    /// Drop the edit without committing
    pub fn cancel(&mut self) {
        self.buffer = None;
        self.original.clear();
    }
}
