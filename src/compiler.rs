//! Device configuration to UI layout compiler
//!
//! [`compile`] never fails loudly: malformed input, unsupported device types
//! and generated layouts that do not pass validation all yield `None`. The
//! reason is kept in [`CompileError`] for logs and tests, see
//! [`Compiler::try_compile_at`].

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::{defaults, widgets};
use crate::device_mgmt::{ConfigError, DeviceConfig};
use crate::generators::{GeneratorError, GeneratorRegistry, BUILTIN_GENERATORS};
use crate::helpers::{now_utc, to_iso};
use crate::layout_mgmt::{
    validate, LayoutError, LayoutMetadata, UiLayout, UiScreen, UiWidget, WidgetKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    Malformed,
    UnsupportedType,
    InvalidGeneratedLayout,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::UnsupportedType => "unsupported_type",
            Self::InvalidGeneratedLayout => "invalid_generated_layout",
        }
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("invalid device configuration: {0}")]
    Malformed(#[from] ConfigError),
    #[error("unsupported device type '{device_type}' (supported: {supported})")]
    UnsupportedType {
        device_type: String,
        supported: String,
    },
    #[error("could not build widget properties: {0}")]
    Properties(#[source] serde_json::Error),
    #[error("generated layout is invalid: {0}")]
    InvalidLayout(#[from] LayoutError),
}

impl CompileError {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Malformed(_) => FailureReason::Malformed,
            Self::UnsupportedType { .. } => FailureReason::UnsupportedType,
            Self::Properties(_) | Self::InvalidLayout(_) => FailureReason::InvalidGeneratedLayout,
        }
    }
}

impl From<GeneratorError> for CompileError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Config(e) => Self::Malformed(e),
            GeneratorError::Properties(e) => Self::Properties(e),
        }
    }
}

#[derive(Serialize)]
struct HeaderProperties<'a> {
    title: &'a str,
    subtitle: &'a str,
}

pub struct Compiler<'r> {
    registry: &'r GeneratorRegistry,
}

impl Default for Compiler<'static> {
    fn default() -> Self {
        Compiler {
            registry: &BUILTIN_GENERATORS,
        }
    }
}

impl<'r> Compiler<'r> {
    pub fn new(registry: &'r GeneratorRegistry) -> Self {
        Compiler { registry }
    }

    pub fn compile_at(&self, input: &Value, now: DateTime<Utc>) -> Option<UiLayout> {
        log_failure(self.try_compile_at(input, now))
    }

    pub fn compile_str_at(&self, config_raw: &str, now: DateTime<Utc>) -> Option<UiLayout> {
        log_failure(self.try_compile_str_at(config_raw, now))
    }

    pub fn try_compile_at(
        &self,
        input: &Value,
        now: DateTime<Utc>,
    ) -> Result<UiLayout, CompileError> {
        let device = DeviceConfig::from_value(input)?;
        self.compile_device(&device, now)
    }

    /// Undecodable text counts as malformed input.
    pub fn try_compile_str_at(
        &self,
        config_raw: &str,
        now: DateTime<Utc>,
    ) -> Result<UiLayout, CompileError> {
        let device = DeviceConfig::from_json_str(config_raw)?;
        self.compile_device(&device, now)
    }

    fn compile_device(
        &self,
        device: &DeviceConfig,
        now: DateTime<Utc>,
    ) -> Result<UiLayout, CompileError> {
        let generator =
            self.registry
                .get(&device.device_type)
                .ok_or_else(|| CompileError::UnsupportedType {
                    device_type: device.device_type.clone(),
                    supported: self.registry.device_types().iter().join(", "),
                })?;

        let mut screen = main_screen(device);
        screen.push(header_widget(device)?);

        log::debug!(
            "Generating layout for {} device {:?}",
            device.device_type,
            device.device_id
        );
        generator.generate(device, &mut screen)?;

        let layout = UiLayout {
            version: defaults::LAYOUT_VERSION.to_string(),
            metadata: LayoutMetadata {
                device_id: device
                    .device_id
                    .clone()
                    .unwrap_or_else(|| defaults::UNKNOWN_DEVICE_ID.to_string()),
                last_updated: to_iso(now),
            },
            screens: vec![screen],
        };

        validate(&layout)?;
        Ok(layout)
    }
}

fn log_failure(result: Result<UiLayout, CompileError>) -> Option<UiLayout> {
    match result {
        Ok(layout) => Some(layout),
        Err(e) => {
            match e.reason() {
                FailureReason::Malformed | FailureReason::UnsupportedType => {
                    log::warn!("No layout generated ({}): {}", e.reason().as_str(), e)
                }
                FailureReason::InvalidGeneratedLayout => {
                    log::error!("No layout generated ({}): {}", e.reason().as_str(), e)
                }
            }
            None
        }
    }
}

fn main_screen(device: &DeviceConfig) -> UiScreen {
    let title = match device.name() {
        Some(name) => name.to_string(),
        None => format!(
            "Device {}",
            device
                .device_id
                .as_deref()
                .unwrap_or(defaults::UNKNOWN_DEVICE_LABEL)
        ),
    };
    UiScreen::new(defaults::MAIN_SCREEN_ID, title)
}

fn header_widget(device: &DeviceConfig) -> Result<UiWidget, CompileError> {
    let props = HeaderProperties {
        title: device.name().unwrap_or(defaults::HEADER_TITLE),
        subtitle: device.model().unwrap_or_default(),
    };
    let properties =
        crate::generators::to_properties(&props).map_err(CompileError::Properties)?;
    Ok(UiWidget::new(
        WidgetKind::Header,
        widgets::HEADER_COMPONENT_ID,
        properties,
    ))
}

/// Compile a device configuration into a validated layout stamped with the
/// current time, or `None` when no layout can be produced.
pub fn compile(input: &Value) -> Option<UiLayout> {
    compile_at(input, now_utc())
}

pub fn compile_at(input: &Value, now: DateTime<Utc>) -> Option<UiLayout> {
    Compiler::default().compile_at(input, now)
}

pub fn try_compile_at(input: &Value, now: DateTime<Utc>) -> Result<UiLayout, CompileError> {
    Compiler::default().try_compile_at(input, now)
}

/// Like [`compile`], for raw JSON text. Undecodable text counts as malformed
/// input.
pub fn compile_str(config_raw: &str) -> Option<UiLayout> {
    Compiler::default().compile_str_at(config_raw, now_utc())
}
