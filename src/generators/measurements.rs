use serde::Serialize;

use crate::constants::topics;
use crate::device_mgmt::config::Measurements;
use crate::device_mgmt::{resolve_range, ResolvedRange};
use crate::layout_mgmt::{UiScreen, UiWidget, WidgetKind};

use super::{to_properties, GeneratorError};

#[derive(Serialize)]
struct GaugeProperties<'a> {
    title: String,
    topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'a str>,
    #[serde(flatten)]
    range: ResolvedRange,
}

/// One gauge per measurement, in measurement order
pub(super) fn push_gauges(
    device_type: &str,
    measurements: &Measurements,
    screen: &mut UiScreen,
) -> Result<(), GeneratorError> {
    for (key, measurement) in measurements.iter() {
        let props = GaugeProperties {
            title: capitalize(key),
            topic: topics::measurement(device_type, key),
            unit: measurement.unit.as_deref(),
            range: resolve_range(key, measurement.ranges.as_ref()),
        };
        screen.push(UiWidget::new(
            WidgetKind::Gauge,
            format!("{key}-gauge"),
            to_properties(&props)?,
        ));
    }
    Ok(())
}

pub(super) fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
