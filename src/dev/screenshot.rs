/// Text screenshots of the terminal
///
/// Shift-S in the options panel writes the current frame to a timestamped
/// text file in the working directory.

use std::fs::File;
use std::io::{self, Write};
use ratatui::{buffer::Buffer, layout::Rect};

/// Filename for a screenshot taken at `time`
pub fn screenshot_filename(time: chrono::DateTime<chrono::Local>) -> String {
    format!("{}-screenshot-{}.txt", env!("CARGO_PKG_NAME"), time.format("%Y%m%d-%H%M%S"))
}

/// Text of `area` in `buffer`, one line per row, trailing spaces trimmed
pub fn buffer_text(buffer: &Buffer, area: Rect) -> String {
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

/// Save a terminal screenshot from a buffer to a text file
///
/// Call from inside a draw, after the frame has been rendered.
pub fn save_buffer_screenshot(buffer: &Buffer, area: Rect, filename: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(buffer_text(buffer, area).as_bytes())
}
