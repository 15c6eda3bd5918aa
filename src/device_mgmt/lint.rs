//! Threshold sanity checks for device configurations
//!
//! These diagnostics are advisory. They never influence which configurations
//! the compiler accepts or which layouts the validator accepts.

use std::fmt;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct LintIssue {
    pub measurement: String,
    pub message: String,
}

impl LintIssue {
    fn new(measurement: &str, message: impl Into<String>) -> Self {
        LintIssue {
            measurement: measurement.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.measurement, self.message)
    }
}

pub fn lint_device_config(device_config: &Value) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let Some(config) = device_config.get("config") else {
        return issues;
    };

    match config.get("measurements") {
        None | Some(Value::Null) => {}
        Some(Value::Object(measurements)) => {
            for (key, measurement) in measurements {
                lint_measurement(key, measurement, &mut issues);
            }
        }
        Some(_) => issues.push(LintIssue::new(
            "measurements",
            "must be a map of measurement names to measurements",
        )),
    }

    if let Some(battery) = config.get("battery").filter(|b| !b.is_null()) {
        lint_measurement("battery", battery, &mut issues);
    }

    issues
}

fn lint_measurement(key: &str, measurement: &Value, issues: &mut Vec<LintIssue>) {
    if !measurement.is_object() {
        issues.push(LintIssue::new(key, "invalid measurement configuration"));
        return;
    }
    if measurement.get("unit").and_then(Value::as_str).is_none() {
        issues.push(LintIssue::new(key, "missing or invalid unit"));
    }
    let Some(ranges) = measurement.get("ranges").filter(|r| !r.is_null()) else {
        return;
    };

    let bound = |name: &str| ranges.get(name).and_then(Value::as_f64);
    let (Some(min), Some(max), Some(warning), Some(critical)) = (
        bound("min"),
        bound("max"),
        bound("warning"),
        bound("critical"),
    ) else {
        issues.push(LintIssue::new(
            key,
            "ranges must define numeric min, max, warning and critical",
        ));
        return;
    };

    if min >= max {
        issues.push(LintIssue::new(key, "min must be less than max"));
    }
    if warning <= min || warning >= max {
        issues.push(LintIssue::new(key, "warning threshold must lie between min and max"));
    }
    if critical <= warning || critical >= max {
        issues.push(LintIssue::new(
            key,
            "critical threshold must lie between warning and max",
        ));
    }
}
