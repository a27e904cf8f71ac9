/// Text field width heuristic
///
/// The field is sized to fit the widest value the slider can plausibly show:
/// one step past either side of `max`, plus a few spare characters for a
/// sign, an exponent, or the field's own controls.
use crate::formatting::format_number;
use crate::measure::TextMeasurer;

/// Extra characters for sign, exponent and controls
pub const MARGIN_DIGITS: usize = 4;

/// A digit that renders at least as wide as every other digit
pub const REFERENCE_GLYPH: char = '0';

/// Cells of padding on each side of the text
pub const INPUT_PADDING: u16 = 1;

/// Width used until the first measurement succeeds
pub const DEFAULT_INPUT_WIDTH: u16 = 10;

/// Number of characters the widest boundary value renders with
pub fn max_digits(max: f64, step: Option<f64>) -> usize {
    let delta = step.unwrap_or(0.0);
    let above = format_number(max + delta).chars().count();
    let below = format_number(max - delta).chars().count();
    above.max(below) + MARGIN_DIGITS
}

/// The string that gets measured: the reference glyph repeated `max_digits` times
pub fn reference_text(max: f64, step: Option<f64>) -> String {
    REFERENCE_GLYPH.to_string().repeat(max_digits(max, step))
}

/// Width of the text field in cells, or `None` when text cannot be measured
pub fn input_width(
    measurer: &dyn TextMeasurer,
    max: f64,
    step: Option<f64>,
    padding: u16,
) -> Option<u16> {
    let measured = measurer.measure(&reference_text(max, step))?;
    if !measured.is_finite() || measured < 0.0 {
        return None;
    }
    let text_width = measured.ceil().min(u16::MAX as f64) as u16;
    Some(text_width.saturating_add(padding.saturating_mul(2)))
}

/// Identifies the inputs the width was computed from
///
/// Floats are compared by bit pattern so the key is `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    max: u64,
    step: Option<u64>,
}

impl LayoutKey {
    pub fn new(max: f64, step: Option<f64>) -> Self {
        Self {
            max: max.to_bits(),
            step: step.map(f64::to_bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{CellMeasurer, Unmeasurable};

    #[test]
    fn test_max_digits_without_step() {
        // "100" + margin
        assert_eq!(max_digits(100.0, None), 7);
        assert_eq!(max_digits(100000.0, None), 10);
    }

    #[test]
    fn test_max_digits_takes_wider_side() {
        // 100 + 0.5 = "100.5", 100 - 0.5 = "99.5"
        assert_eq!(max_digits(100.0, Some(0.5)), 9);
        // 0 - 1 = "-1" is wider than "1"
        assert_eq!(max_digits(0.0, Some(1.0)), 6);
    }

    #[test]
    fn test_max_digits_huge_max_uses_exponent_form() {
        // "1e+300" + margin
        assert_eq!(max_digits(1e300, None), 10);
        assert_eq!(input_width(&CellMeasurer, 1e300, None, INPUT_PADDING), Some(12));
    }

    #[test]
    fn test_reference_text() {
        assert_eq!(reference_text(9.0, None), "00000");
    }

    #[test]
    fn test_input_width_grows_and_shrinks_with_max() {
        let narrow = input_width(&CellMeasurer, 100.0, None, INPUT_PADDING).unwrap();
        let wide = input_width(&CellMeasurer, 100000.0, None, INPUT_PADDING).unwrap();
        let back = input_width(&CellMeasurer, 100.0, None, INPUT_PADDING).unwrap();

        assert_eq!(narrow, 9);
        assert_eq!(wide, 12);
        assert!(wide > narrow);
        assert_eq!(back, narrow);
    }

    #[test]
    fn test_input_width_single_position_range() {
        assert_eq!(input_width(&CellMeasurer, 7.0, None, INPUT_PADDING), Some(7));
    }

    #[test]
    fn test_input_width_unmeasurable() {
        assert_eq!(input_width(&Unmeasurable, 100.0, Some(1.0), INPUT_PADDING), None);
    }

    #[test]
    fn test_layout_key_equality() {
        assert_eq!(LayoutKey::new(100.0, None), LayoutKey::new(100.0, None));
        assert_ne!(LayoutKey::new(100.0, None), LayoutKey::new(100.0, Some(1.0)));
    }
}
