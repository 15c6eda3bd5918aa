mod legacy;
mod validate;

pub mod models;

pub use legacy::to_legacy_components;
pub use models::{LayoutMetadata, Properties, UiComponent, UiLayout, UiScreen, UiWidget, WidgetKind};
pub use validate::{validate, validate_value, LayoutError};
