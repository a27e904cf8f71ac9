use anyhow::{bail, Result};

use crate::editor::width::{input_width, max_digits, reference_text};
use crate::measure::CellMeasurer;

/// Lines describing how the text field width is derived
pub fn report(max: f64, step: Option<f64>, padding: u16) -> Result<Vec<String>> {
    if !max.is_finite() {
        bail!("Maximum must be a finite number, got {}", max);
    }
    if let Some(step) = step {
        if !step.is_finite() || step <= 0.0 {
            bail!("Step must be a positive number, got {}", step);
        }
    }

    let width = match input_width(&CellMeasurer, max, step, padding) {
        Some(width) => format!("{} cells", width),
        None => "unmeasurable".to_string(),
    };

    Ok(vec![
        format!("{:<16} {}", "max:", max),
        format!("{:<16} {}", "step:", step.map_or("none".to_string(), |s| s.to_string())),
        format!("{:<16} {}", "digits:", max_digits(max, step)),
        format!("{:<16} {}", "reference text:", reference_text(max, step)),
        format!("{:<16} {}", "padding:", padding),
        format!("{:<16} {}", "input width:", width),
    ])
}

pub fn run(max: f64, step: Option<f64>, padding: u16) -> Result<()> {
    for line in report(max, step, padding)? {
        println!("{}", line);
    }
    Ok(())
}
