/// Magnitude from which numbers print in exponent form
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitude below which numbers print in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way a dashboard field shows it
///
/// Integral values print without a fractional part, negative zero prints as
/// "0", and infinities print as "Infinity"/"-Infinity". Very large and very
/// small magnitudes use exponent form with a signed exponent ("1e+21",
/// "1.5e-7"). Everything else uses the shortest representation that parses
/// back to the same value.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}

/// Number of decimal places a step value carries
///
/// Used to round snapped values so that repeated stepping does not
/// accumulate binary noise (0.1 + 0.2 lands on 0.3).
pub fn decimal_places(step: f64) -> u32 {
    let text = format_number(step);
    let (mantissa, exponent) = match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (text.as_str(), 0),
    };
    let fraction = match mantissa.split_once('.') {
        Some((_, fraction)) => fraction.len() as i64,
        None => 0,
    };
    (fraction - exponent).clamp(0, i64::from(u32::MAX)) as u32
}

/// Round a value to a fixed number of decimal places
///
/// Values are returned unchanged when the scale factor overflows.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if places == 0 {
        return value.round();
    }
    let factor = 10f64.powi(places.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
