//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use std::sync::Arc;

use ratatui::buffer::Buffer;

use crate::config::{Config, FieldConfig};
use crate::editor::SliderSettings;
use crate::measure::{CellMeasurer, TextMeasurer};

use super::runtime::Runtime;
use super::state::AppState;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
///
/// Trailing whitespace is ignored on both sides.
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Build a field config from plain bounds
pub fn field(name: &str, value: Option<f64>, min: f64, max: f64, step: Option<f64>) -> FieldConfig {
    FieldConfig {
        name: name.to_string(),
        value,
        settings: SliderSettings {
            min: Some(min),
            max: Some(max),
            step,
            ..Default::default()
        },
    }
}

/// Config holding exactly the given fields and no preview binding
pub fn config_with_fields(fields: Vec<FieldConfig>) -> Config {
    let mut config = Config {
        fields,
        ..Config::default()
    };
    config.preview.bind = None;
    config
}

/// Runtime over the given config, measuring text in terminal cells
pub fn runtime_with(config: Config) -> Runtime {
    runtime_with_measurer(config, Arc::new(CellMeasurer))
}

pub fn runtime_with_measurer(config: Config, measurer: Arc<dyn TextMeasurer>) -> Runtime {
    let mut runtime = Runtime::new(AppState::from_config(config), measurer);
    runtime.run_effects();
    runtime
}
