use anyhow::{bail, Result};

use crate::config::{Config, FieldConfig};
use crate::editor::{input_width, ValueRange};
use crate::formatting::format_number;
use crate::measure::CellMeasurer;

fn field_row(field: &FieldConfig, padding: u16) -> String {
    let range = ValueRange::from_settings(&field.settings);
    let step = range.step.map_or("-".to_string(), format_number);
    let marks = range
        .marks
        .iter()
        .map(|mark| mark.label.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let initial = format_number(field.value.unwrap_or(range.min));
    let width = input_width(&CellMeasurer, range.max, range.step, padding)
        .map_or("-".to_string(), |w| w.to_string());

    format!(
        "{:<16} {:>10} {:>10} {:>8} {:>10} {:>6}  {}",
        field.name,
        format_number(range.min),
        format_number(range.max),
        step,
        initial,
        width,
        marks
    )
}

/// Table of the configured fields
pub fn table(config: &Config) -> Result<Vec<String>> {
    if config.fields.is_empty() {
        bail!("No fields configured");
    }

    let mut lines = vec![
        format!(
            "{:<16} {:>10} {:>10} {:>8} {:>10} {:>6}  Marks",
            "Name", "Min", "Max", "Step", "Initial", "Width"
        ),
        "─".repeat(80),
    ];
    lines.extend(
        config
            .fields
            .iter()
            .map(|field| field_row(field, config.input_padding)),
    );
    Ok(lines)
}

pub fn run(config: &Config) -> Result<()> {
    println!("\nConfigured Fields");
    println!("=================\n");
    for line in table(config)? {
        println!("{}", line);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_default_fields() {
        let lines = table(&Config::default()).unwrap();

        assert!(lines[0].starts_with("Name"));
        assert_eq!(lines.len(), 2 + Config::default().fields.len());
        assert!(lines[2].starts_with("Opacity"));
        assert!(lines[2].contains("0.01"));
        assert!(lines[4].ends_with("-180° 0° 180°"));
    }

    #[test]
    fn test_fixed_field_uses_min_as_initial() {
        let lines = table(&Config::default()).unwrap();
        let fixed = lines.iter().find(|l| l.starts_with("Fixed")).unwrap();
        let columns: Vec<&str> = fixed.split_whitespace().collect();
        assert_eq!(columns[1..5], ["7", "7", "-", "7"]);
    }

    #[test]
    fn test_table_without_fields_fails() {
        let config = Config {
            fields: Vec::new(),
            ..Config::default()
        };
        assert!(table(&config).is_err());
    }
}
