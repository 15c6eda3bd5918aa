use serde::Serialize;
use serde_json::Value;

use crate::constants::{topics, widgets};
use crate::device_mgmt::config::{EnvironmentSensorDetails};
use crate::device_mgmt::DeviceConfig;
use crate::layout_mgmt::{UiScreen, UiWidget, WidgetKind};

use super::measurements::push_gauges;
use super::{to_properties, DeviceLayoutGenerator, GeneratorError};

pub const DEVICE_TYPE: &str = "environment-sensor";

/// Gauges for every measurement and a battery status widget.
///
/// Battery ranges are passed through as configured; no default bounds are
/// filled in for them.
pub struct EnvironmentSensorGenerator;

#[derive(Serialize)]
struct BatteryProperties<'a> {
    title: &'static str,
    topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<&'a Value>,
}

impl DeviceLayoutGenerator for EnvironmentSensorGenerator {
    fn device_type(&self) -> &'static str {
        DEVICE_TYPE
    }

    fn generate(
        &self,
        device: &DeviceConfig,
        screen: &mut UiScreen,
    ) -> Result<(), GeneratorError> {
        let details: EnvironmentSensorDetails = device.details()?;

        if let Some(measurements) = &details.measurements {
            push_gauges(&device.device_type, measurements, screen)?;
        }

        if let Some(battery) = &details.battery {
            let props = BatteryProperties {
                title: widgets::BATTERY_TITLE,
                topic: topics::battery(&device.device_type),
                unit: battery.unit.as_deref(),
                ranges: battery.ranges.as_ref(),
            };
            screen.push(UiWidget::new(
                WidgetKind::Status,
                widgets::BATTERY_COMPONENT_ID,
                to_properties(&props)?,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate(config: Value) -> UiScreen {
        let device = DeviceConfig::from_value(&json!({
            "type": DEVICE_TYPE,
            "deviceId": "env-1",
            "config": config
        }))
        .unwrap();
        let mut screen = UiScreen::new("main", "Greenhouse");
        EnvironmentSensorGenerator
            .generate(&device, &mut screen)
            .unwrap();
        screen
    }

    #[test]
    fn test_gauges_without_chart() {
        let screen = generate(json!({"measurements": {
            "temperature": {"unit": "°C"},
            "humidity": {"unit": "%"},
            "co2": {"unit": "ppm"}
        }}));
        let types: Vec<&str> = screen.widgets.iter().map(|w| w.widget_type.as_str()).collect();
        assert_eq!(types, ["gauge", "gauge", "gauge"]);
        assert_eq!(screen.widgets[0].properties["min"], json!(-20));
        assert_eq!(screen.widgets[0].properties["max"], json!(50));
        assert_eq!(screen.widgets[2].properties["max"], json!(5000));
        assert_eq!(
            screen.widgets[1].properties["topic"],
            json!("iot/device/environment-sensor/humidity")
        );
    }

    #[test]
    fn test_battery_ranges_pass_through() {
        let screen = generate(json!({
            "battery": {"unit": "%", "ranges": {"min": 0, "max": 100, "warning": 20, "critical": 10}}
        }));
        assert_eq!(screen.widgets.len(), 1);
        let status = &screen.widgets[0];
        assert_eq!(status.widget_type, "status");
        assert_eq!(status.component_id, "battery");
        assert_eq!(
            Value::Object(status.properties.clone()),
            json!({
                "title": "Battery",
                "topic": "iot/device/environment-sensor/battery",
                "unit": "%",
                "ranges": {"min": 0, "max": 100, "warning": 20, "critical": 10}
            })
        );
    }

    #[test]
    fn test_battery_ranges_keep_unknown_keys() {
        let ranges = json!({"min": 0, "max": 100, "warning": 20, "critical": 10, "step": 5});
        let screen = generate(json!({"battery": {"unit": "%", "ranges": ranges.clone()}}));
        assert_eq!(screen.widgets[0].properties["ranges"], ranges);
    }

    #[test]
    fn test_battery_without_ranges_gets_no_default_bounds() {
        let screen = generate(json!({"battery": {"unit": "V"}}));
        let status = &screen.widgets[0];
        assert!(status.properties.get("ranges").is_none());
        assert!(status.properties.get("min").is_none());
        assert!(status.properties.get("max").is_none());
    }
}
