//! Projection of a layout onto the legacy flat `components[]` shape
//!
//! Older consumers read one flat list of components instead of screens of
//! widgets. The list is derived from the canonical layout on demand.

use serde_json::Value;

use super::models::{Properties, UiComponent, UiLayout, UiWidget, WidgetKind};

const LEGACY_TOGGLE_TYPE: &str = "switch";

pub fn to_legacy_components(layout: &UiLayout) -> Vec<UiComponent> {
    layout
        .screens
        .iter()
        .flat_map(|screen| screen.widgets.iter())
        .map(component_from_widget)
        .collect()
}

fn component_from_widget(widget: &UiWidget) -> UiComponent {
    let component_type = match widget.kind() {
        Some(WidgetKind::Toggle) => LEGACY_TOGGLE_TYPE.to_string(),
        _ => widget.widget_type.clone(),
    };

    let mut config: Properties = widget.properties.clone();
    let title = match config.remove("title") {
        Some(Value::String(title)) => title,
        Some(other) => other.to_string(),
        None => widget.component_id.clone(),
    };
    let topic = match config.remove("topic") {
        Some(Value::String(topic)) => Some(topic),
        _ => None,
    };

    UiComponent {
        component_type,
        title,
        topic,
        config: (!config.is_empty()).then_some(config),
    }
}
