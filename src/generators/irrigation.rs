use serde::Serialize;
use serde_json::Number;

use crate::constants::{defaults, topics, widgets};
use crate::device_mgmt::config::{IrrigationDetails, Zone};
use crate::device_mgmt::DeviceConfig;
use crate::layout_mgmt::{UiScreen, UiWidget, WidgetKind};

use super::{to_properties, DeviceLayoutGenerator, GeneratorError};

pub const DEVICE_TYPE: &str = "smart-irrigation";

/// A toggle per irrigation zone and one scheduler covering all zones
pub struct IrrigationGenerator;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleProperties<'a> {
    title: &'a str,
    topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_duration: Option<&'a Number>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduledZone<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_duration: Option<&'a Number>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchedulerProperties<'a> {
    title: &'static str,
    zones: Vec<ScheduledZone<'a>>,
    default_duration: Number,
    max_duration: Number,
    schedule_topic: String,
}

fn zone_name(zone: &Zone) -> &str {
    zone.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&zone.id)
}

/// Zero durations count as not configured
fn duration_or(duration: Option<Number>, default: u64) -> Number {
    duration
        .filter(|d| d.as_f64() != Some(0.0))
        .unwrap_or_else(|| Number::from(default))
}

impl DeviceLayoutGenerator for IrrigationGenerator {
    fn device_type(&self) -> &'static str {
        DEVICE_TYPE
    }

    fn generate(
        &self,
        device: &DeviceConfig,
        screen: &mut UiScreen,
    ) -> Result<(), GeneratorError> {
        let details: IrrigationDetails = device.details()?;
        let Some(zones) = details.zones else {
            log::debug!("Irrigation controller {:?} has no zones", device.device_id);
            return Ok(());
        };

        for zone in &zones {
            let props = ToggleProperties {
                title: zone_name(zone),
                topic: topics::zone_state(&device.device_type, &zone.id),
                max_duration: zone.max_duration.as_ref(),
            };
            screen.push(UiWidget::new(
                WidgetKind::Toggle,
                format!("zone-{}", zone.id),
                to_properties(&props)?,
            ));
        }

        let settings = details.scheduler.unwrap_or_default();
        let props = SchedulerProperties {
            title: widgets::SCHEDULER_TITLE,
            zones: zones
                .iter()
                .map(|zone| ScheduledZone {
                    id: &zone.id,
                    name: zone_name(zone),
                    max_duration: zone.max_duration.as_ref(),
                })
                .collect(),
            default_duration: duration_or(
                settings.default_duration,
                defaults::SCHEDULER_DEFAULT_DURATION,
            ),
            max_duration: duration_or(settings.max_duration, defaults::SCHEDULER_MAX_DURATION),
            schedule_topic: topics::schedule(&device.device_type),
        };
        screen.push(UiWidget::new(
            WidgetKind::Scheduler,
            widgets::SCHEDULER_COMPONENT_ID,
            to_properties(&props)?,
        ));
        Ok(())
    }
}
