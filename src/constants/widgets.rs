/// Widget types accepted by the layout validator.
///
/// Narrower than `WidgetKind`: `summary`, `climate` and `actionPanel` are
/// known widget kinds but are not accepted here.
pub const ALLOWED_TYPES: &[&str] = &[
    "toggle",
    "gauge",
    "chart",
    "video",
    "status",
    "scheduler",
    "header",
];

pub const HEADER_COMPONENT_ID: &str = "header";
pub const CHART_COMPONENT_ID: &str = "measurements-chart";
pub const SCHEDULER_COMPONENT_ID: &str = "schedule";
pub const BATTERY_COMPONENT_ID: &str = "battery";

pub const CHART_TITLE: &str = "Real-time Measurements";
pub const SCHEDULER_TITLE: &str = "Irrigation Schedule";
pub const BATTERY_TITLE: &str = "Battery";
