mod lint;
mod ranges;

pub mod config;

pub use config::{ConfigError, DeviceConfig};
pub use lint::{lint_device_config, LintIssue};
pub use ranges::{default_bounds, resolve_range, Bounds, ResolvedRange};
