//! Fallback bounds for measurements that do not configure their own range

use serde::Serialize;
use serde_json::Number;

use super::config::Ranges;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

/// Default display bounds for a measurement, keyed by measurement name
pub fn default_bounds(measurement_key: &str) -> Bounds {
    let (min, max) = match measurement_key {
        "voltage" => (0, 500),
        "current" => (0, 100),
        "power" => (0, 50),
        "temperature" => (-20, 50),
        "humidity" => (0, 100),
        "co2" => (0, 5000),
        _ => (0, 100),
    };
    Bounds { min, max }
}

/// Bounds and thresholds as they are emitted on a widget.
///
/// `min`/`max` always carry a value. Thresholds have no default and stay
/// absent when not configured.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ResolvedRange {
    pub min: Number,
    pub max: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<Number>,
}

pub fn resolve_range(measurement_key: &str, ranges: Option<&Ranges>) -> ResolvedRange {
    let defaults = default_bounds(measurement_key);
    let configured = ranges.cloned().unwrap_or_default();
    ResolvedRange {
        min: configured.min.unwrap_or_else(|| Number::from(defaults.min)),
        max: configured.max.unwrap_or_else(|| Number::from(defaults.max)),
        warning: configured.warning,
        critical: configured.critical,
    }
}
