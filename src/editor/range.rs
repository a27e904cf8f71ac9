use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::formatting::{decimal_places, format_number, round_to_places};

/// Minimum used when the settings leave it out
pub const DEFAULT_MIN: f64 = 0.0;

/// Maximum used when the settings leave it out
pub const DEFAULT_MAX: f64 = 100.0;

/// Fraction of the span a key press moves a continuous slider
const CONTINUOUS_KEY_FRACTION: f64 = 0.01;

/// Steps moved by PageUp/PageDown
const PAGE_STEPS: f64 = 10.0;

/// A labeled position on the slider track
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub position: f64,
    pub label: String,
}

/// Marks ordered by position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Marks(Vec<Mark>);

impl Marks {
    pub fn new(marks: impl IntoIterator<Item = (f64, String)>) -> Self {
        let mut marks: Vec<Mark> = marks
            .into_iter()
            .map(|(position, label)| Mark { position, label })
            .collect();
        marks.sort_by(|a, b| a.position.total_cmp(&b.position));
        marks.dedup_by(|a, b| a.position == b.position);
        Marks(marks)
    }

    /// The marks shown when none are configured: both ends, labeled by value
    pub fn endpoints(min: f64, max: f64) -> Self {
        Self::new([(min, format_number(min)), (max, format_number(max))])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Slider settings as a panel author writes them
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub marks: Option<BTreeMap<String, String>>,
    pub included: Option<bool>,
    pub aria_label_for_handle: Option<String>,
}

/// Keyboard movements of the drag control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    Increase,
    Decrease,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Bounds, step and marks of one editor
///
/// `min <= max` is assumed but not enforced; every method here stays total
/// (no panics, no division by zero) when it does not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
    pub marks: Marks,
    pub included: bool,
    pub aria_label: Option<String>,
}

impl ValueRange {
    /// Continuous range with endpoint marks
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            marks: Marks::endpoints(min, max),
            included: true,
            aria_label: None,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = valid_step(step);
        self
    }

    pub fn with_marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Build a range from author settings, filling in defaults
    pub fn from_settings(settings: &SliderSettings) -> Self {
        let min = settings.min.unwrap_or(DEFAULT_MIN);
        let max = settings.max.unwrap_or(DEFAULT_MAX);
        if min > max {
            warn!("Slider range has min {} above max {}", min, max);
        }

        let step = settings.step.and_then(|step| {
            let valid = valid_step(step);
            if valid.is_none() {
                warn!("Ignoring invalid slider step {}", step);
            }
            valid
        });

        let marks = match &settings.marks {
            Some(configured) => Marks::new(configured.iter().filter_map(|(key, label)| {
                match key.trim().parse::<f64>() {
                    Ok(position) if position.is_finite() => Some((position, label.clone())),
                    _ => {
                        warn!("Ignoring slider mark with non-numeric position '{}'", key);
                        None
                    }
                }
            })),
            None => Marks::endpoints(min, max),
        };

        Self {
            min,
            max,
            step,
            marks,
            included: settings.included.unwrap_or(true),
            aria_label: settings.aria_label_for_handle.clone(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp into `[min, max]`
    ///
    /// Unlike `f64::clamp` this does not panic when `min > max`; the result
    /// is then `max`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp and quantize to the step grid anchored at `min`
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        match self.step {
            Some(step) => {
                let steps = ((clamped - self.min) / step).round();
                let mut snapped = self.min + steps * step;
                // stay on the grid when rounding overshoots the last full step
                if snapped > self.max {
                    snapped -= step;
                }
                let places = decimal_places(step).max(decimal_places(self.min));
                self.clamp(round_to_places(snapped, places))
            }
            None => clamped,
        }
    }

    /// Position of `value` along the track, from 0.0 to 1.0
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }

    /// Snapped value at a track position from 0.0 to 1.0
    pub fn value_at_ratio(&self, ratio: f64) -> f64 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.snap(self.min + ratio * self.span())
    }

    /// Distance one key press moves the handle
    pub fn key_delta(&self) -> f64 {
        match self.step {
            Some(step) => step,
            None => (self.span() * CONTINUOUS_KEY_FRACTION).max(0.0),
        }
    }

    /// New handle position after a keyboard movement from `current`
    pub fn nudge(&self, current: f64, key: SliderKey) -> f64 {
        let delta = self.key_delta();
        match key {
            SliderKey::Increase => self.snap(current + delta),
            SliderKey::Decrease => self.snap(current - delta),
            SliderKey::PageUp => self.snap(current + delta * PAGE_STEPS),
            SliderKey::PageDown => self.snap(current - delta * PAGE_STEPS),
            SliderKey::Home => self.snap(self.min),
            SliderKey::End => self.snap(self.max),
        }
    }

    /// Whether a mark renders as active for the given handle value
    pub fn is_mark_active(&self, mark: &Mark, value: f64) -> bool {
        if self.included {
            mark.position <= value
        } else {
            mark.position == value
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX)
    }
}

fn valid_step(step: f64) -> Option<f64> {
    if step.is_finite() && step > 0.0 {
        Some(step)
    } else {
        None
    }
}
