//! Device configuration input
//!
//! Only `type` and `deviceId` are guaranteed on a device configuration. The
//! `config` bag is parsed lazily into the strongly typed details of whichever
//! device type handles it, so every generator sees its own shape and unknown
//! fields are ignored.

use std::fmt;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("device configuration must be an object")]
    NotAnObject,
    #[error("device configuration must have a type string")]
    MissingType,
    #[error("could not parse config JSON: {0}")]
    ParseJson(#[source] serde_json::Error),
    #[error("invalid config for device type '{device_type}': {source}")]
    InvalidDetails {
        device_type: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceConfig {
    pub device_type: String,
    pub device_id: Option<String>,
    details: Value,
}

impl DeviceConfig {
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::NotAnObject)?;
        let device_type = non_empty_str(object.get("type")).ok_or(ConfigError::MissingType)?;

        Ok(DeviceConfig {
            device_type: device_type.to_string(),
            device_id: non_empty_str(object.get("deviceId")).map(str::to_string),
            details: object.get("config").cloned().unwrap_or(Value::Null),
        })
    }

    pub fn from_json_str(config_raw: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(config_raw).map_err(ConfigError::ParseJson)?;
        Self::from_value(&value)
    }

    /// Display name, when one was configured
    pub fn name(&self) -> Option<&str> {
        non_empty_str(self.details.get("name"))
    }

    pub fn model(&self) -> Option<&str> {
        non_empty_str(self.details.get("model"))
    }

    /// Parse the `config` bag into the details type of a device kind.
    ///
    /// A missing or null bag yields the default (empty) details.
    pub fn details<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        if self.details.is_null() {
            return Ok(T::default());
        }
        T::deserialize(&self.details).map_err(|source| ConfigError::InvalidDetails {
            device_type: self.device_type.clone(),
            source,
        })
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Ranges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<Number>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Measurement {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub ranges: Option<Ranges>,
}

/// Named measurements, in the order they appear in the source JSON object
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measurements(Vec<(String, Measurement)>);

impl Measurements {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.0.iter().map(|(key, m)| (key.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Measurements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MeasurementsVisitor;

        impl<'de> Visitor<'de> for MeasurementsVisitor {
            type Value = Measurements;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of measurement names to measurements")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Measurements, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Measurement>()? {
                    entries.push(entry);
                }
                Ok(Measurements(entries))
            }
        }

        deserializer.deserialize_map(MeasurementsVisitor)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub max_duration: Option<Number>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerSettings {
    #[serde(default)]
    pub default_duration: Option<Number>,
    #[serde(default)]
    pub max_duration: Option<Number>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct EnergyMeterDetails {
    #[serde(default)]
    pub measurements: Option<Measurements>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct IrrigationDetails {
    #[serde(default)]
    pub zones: Option<Vec<Zone>>,
    #[serde(default)]
    pub scheduler: Option<SchedulerSettings>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct EnvironmentSensorDetails {
    #[serde(default)]
    pub measurements: Option<Measurements>,
    #[serde(default)]
    pub battery: Option<Battery>,
}

/// Battery reading of a sensor. Its ranges are forwarded untouched, so they
/// stay an open JSON value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Battery {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub ranges: Option<Value>,
}
