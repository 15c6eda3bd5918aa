//! Compiles IoT device configurations into renderable UI layouts.
//!
//! The entry point is [`compile`]: it takes a JSON-decoded device
//! configuration and returns a validated [`UiLayout`], or `None` when the
//! input is malformed, the device type is not supported, or the generated
//! layout does not pass validation.

pub mod compiler;
pub mod constants;
pub mod device_mgmt;
pub mod generators;
pub mod helpers;
pub mod layout_mgmt;

pub use compiler::{compile, compile_at, compile_str, try_compile_at, CompileError, FailureReason};
pub use device_mgmt::{default_bounds, lint_device_config};
pub use layout_mgmt::{to_legacy_components, validate, validate_value, UiLayout};
