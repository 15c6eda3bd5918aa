//! Device-type layout generators
//!
//! Each supported device type registers one [`DeviceLayoutGenerator`] under
//! its type tag. The compiler looks the generator up by tag, so an unknown
//! device type is simply a registry miss.

mod energy_meter;
mod environment_sensor;
mod irrigation;
mod measurements;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::device_mgmt::{ConfigError, DeviceConfig};
use crate::layout_mgmt::{Properties, UiScreen};

pub use energy_meter::EnergyMeterGenerator;
pub use environment_sensor::EnvironmentSensorGenerator;
pub use irrigation::IrrigationGenerator;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not build widget properties: {0}")]
    Properties(#[from] serde_json::Error),
}

pub trait DeviceLayoutGenerator: Send + Sync {
    /// Device type tag this generator handles
    fn device_type(&self) -> &'static str;

    /// Append the widgets for `device` to `screen`.
    ///
    /// The header widget is already on the screen when this is called.
    fn generate(&self, device: &DeviceConfig, screen: &mut UiScreen)
        -> Result<(), GeneratorError>;
}

#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<&'static str, Box<dyn DeviceLayoutGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in device type
    pub fn with_builtin_generators() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EnergyMeterGenerator));
        registry.register(Box::new(IrrigationGenerator));
        registry.register(Box::new(EnvironmentSensorGenerator));
        registry
    }

    /// Register a generator, returning the one it replaced if any
    pub fn register(
        &mut self,
        generator: Box<dyn DeviceLayoutGenerator>,
    ) -> Option<Box<dyn DeviceLayoutGenerator>> {
        self.generators.insert(generator.device_type(), generator)
    }

    pub fn get(&self, device_type: &str) -> Option<&dyn DeviceLayoutGenerator> {
        self.generators.get(device_type).map(|g| g.as_ref())
    }

    /// Registered device types, sorted
    pub fn device_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.generators.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

pub static BUILTIN_GENERATORS: Lazy<GeneratorRegistry> =
    Lazy::new(GeneratorRegistry::with_builtin_generators);

/// Serialize a typed property set into the open widget property mapping
pub(crate) fn to_properties<T: Serialize>(props: &T) -> Result<Properties, serde_json::Error> {
    match serde_json::to_value(props)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "widget properties must serialize to an object, got {other}"
        ))),
    }
}
