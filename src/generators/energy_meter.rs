use serde::Serialize;

use crate::constants::{defaults, widgets};
use crate::device_mgmt::config::EnergyMeterDetails;
use crate::device_mgmt::{resolve_range, DeviceConfig, ResolvedRange};
use crate::layout_mgmt::{UiScreen, UiWidget, WidgetKind};

use super::measurements::{capitalize, push_gauges};
use super::{to_properties, DeviceLayoutGenerator, GeneratorError};

pub const DEVICE_TYPE: &str = "energy-meter";

/// Gauges for every measurement, plus a combined chart when there is more
/// than one of them
pub struct EnergyMeterGenerator;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartProperties<'a> {
    title: &'static str,
    chart_type: &'static str,
    time_range: &'static str,
    metrics: Vec<ChartMetric<'a>>,
}

#[derive(Serialize)]
struct ChartMetric<'a> {
    id: &'a str,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'a str>,
    #[serde(flatten)]
    range: ResolvedRange,
}

impl DeviceLayoutGenerator for EnergyMeterGenerator {
    fn device_type(&self) -> &'static str {
        DEVICE_TYPE
    }

    fn generate(
        &self,
        device: &DeviceConfig,
        screen: &mut UiScreen,
    ) -> Result<(), GeneratorError> {
        let details: EnergyMeterDetails = device.details()?;
        let Some(measurements) = details.measurements else {
            log::debug!("Energy meter {:?} has no measurements", device.device_id);
            return Ok(());
        };

        push_gauges(&device.device_type, &measurements, screen)?;

        if measurements.len() > 1 {
            let props = ChartProperties {
                title: widgets::CHART_TITLE,
                chart_type: defaults::CHART_TYPE,
                time_range: defaults::CHART_TIME_RANGE,
                metrics: measurements
                    .iter()
                    .map(|(key, measurement)| ChartMetric {
                        id: key,
                        label: capitalize(key),
                        unit: measurement.unit.as_deref(),
                        range: resolve_range(key, measurement.ranges.as_ref()),
                    })
                    .collect(),
            };
            screen.push(UiWidget::new(
                WidgetKind::Chart,
                widgets::CHART_COMPONENT_ID,
                to_properties(&props)?,
            ));
        }
        Ok(())
    }
}
