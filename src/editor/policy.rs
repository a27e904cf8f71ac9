use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::range::ValueRange;

/// What happens to values that arrive outside the drag control
///
/// The drag control can only produce in-range values. Text-field commits and
/// values pushed by the owner can be anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitPolicy {
    /// Forward values untouched; the owner re-clamps if it cares
    #[default]
    Passthrough,
    /// Clamp text commits and owner values into `[min, max]`
    Clamp,
}

impl CommitPolicy {
    pub fn apply(&self, value: f64, range: &ValueRange) -> f64 {
        match self {
            CommitPolicy::Passthrough => value,
            CommitPolicy::Clamp if value.is_nan() => value,
            CommitPolicy::Clamp => range.clamp(value),
        }
    }
}

impl fmt::Display for CommitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitPolicy::Passthrough => write!(f, "passthrough"),
            CommitPolicy::Clamp => write!(f, "clamp"),
        }
    }
}

impl FromStr for CommitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passthrough" => Ok(CommitPolicy::Passthrough),
            "clamp" => Ok(CommitPolicy::Clamp),
            other => Err(format!("Unknown commit policy: {}", other)),
        }
    }
}
