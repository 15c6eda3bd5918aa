//! Structural validation of UI layouts
//!
//! Checks are made against the JSON form of a layout, so that layouts built in
//! memory and layouts read back from disk go through exactly the same rules.
//! Range ordering and componentId uniqueness are not checked here.

use serde_json::Value;
use thiserror::Error;

use crate::constants::widgets::ALLOWED_TYPES;

use super::models::UiLayout;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout must have a version")]
    MissingVersion,
    #[error("Layout must have metadata with deviceId")]
    MissingDeviceId,
    #[error("Layout must have a screens array")]
    MissingScreens,
    #[error("Screen at index {index} must have an id")]
    ScreenMissingId { index: usize },
    #[error("Screen at index {index} must have a title")]
    ScreenMissingTitle { index: usize },
    #[error("Screen at index {index} must have a widgets array")]
    ScreenMissingWidgets { index: usize },
    #[error("Widget at index {index} in screen {screen} must have a type")]
    WidgetMissingType { screen: String, index: usize },
    #[error("Widget at index {index} in screen {screen} must have a componentId")]
    WidgetMissingComponentId { screen: String, index: usize },
    #[error("Widget at index {index} in screen {screen} must have properties")]
    WidgetMissingProperties { screen: String, index: usize },
    #[error("Widget at index {index} in screen {screen} has invalid type: {widget_type}")]
    InvalidWidgetType {
        screen: String,
        index: usize,
        widget_type: String,
    },
    #[error("could not serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn validate(layout: &UiLayout) -> Result<(), LayoutError> {
    validate_value(&serde_json::to_value(layout)?)
}

pub fn validate_value(layout: &Value) -> Result<(), LayoutError> {
    if is_missing(layout.get("version")) {
        return Err(LayoutError::MissingVersion);
    }
    if is_missing(layout.get("metadata").and_then(|m| m.get("deviceId"))) {
        return Err(LayoutError::MissingDeviceId);
    }
    let screens = layout
        .get("screens")
        .and_then(Value::as_array)
        .ok_or(LayoutError::MissingScreens)?;

    screens
        .iter()
        .enumerate()
        .try_for_each(|(index, screen)| validate_screen(screen, index))
}

fn validate_screen(screen: &Value, index: usize) -> Result<(), LayoutError> {
    if is_missing(screen.get("id")) {
        return Err(LayoutError::ScreenMissingId { index });
    }
    if is_missing(screen.get("title")) {
        return Err(LayoutError::ScreenMissingTitle { index });
    }
    let widgets = screen
        .get("widgets")
        .and_then(Value::as_array)
        .ok_or(LayoutError::ScreenMissingWidgets { index })?;

    let screen_id = display_value(screen.get("id"));
    widgets
        .iter()
        .enumerate()
        .try_for_each(|(index, widget)| validate_widget(widget, &screen_id, index))
}

fn validate_widget(widget: &Value, screen_id: &str, index: usize) -> Result<(), LayoutError> {
    let screen = screen_id.to_string();
    if is_missing(widget.get("type")) {
        return Err(LayoutError::WidgetMissingType { screen, index });
    }
    if is_missing(widget.get("componentId")) {
        return Err(LayoutError::WidgetMissingComponentId { screen, index });
    }
    if is_missing(widget.get("properties")) {
        return Err(LayoutError::WidgetMissingProperties { screen, index });
    }

    let allowed = widget
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| ALLOWED_TYPES.contains(&t));
    if !allowed {
        return Err(LayoutError::InvalidWidgetType {
            screen,
            index,
            widget_type: display_value(widget.get("type")),
        });
    }
    Ok(())
}

/// A field counts as missing when it is absent or holds an empty value
/// (null, false, zero, or the empty string).
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_layout() -> Value {
        json!({
            "version": "1.0",
            "metadata": {"deviceId": "test-device-001", "lastUpdated": "2024-01-01T00:00:00.000Z"},
            "screens": [{
                "id": "main",
                "title": "Test Device",
                "widgets": [{
                    "type": "gauge",
                    "componentId": "temp-sensor-1",
                    "properties": {"title": "Temperature", "topic": "iot/device/temp"}
                }]
            }]
        })
    }

    #[test]
    fn test_accepts_valid_layout() {
        assert!(validate_value(&valid_layout()).is_ok());
    }

    #[test]
    fn test_accepts_screen_without_widgets() {
        let mut layout = valid_layout();
        layout["screens"][0]["widgets"] = json!([]);
        assert!(validate_value(&layout).is_ok());
    }

    #[test]
    fn test_rejects_missing_version() {
        let mut layout = valid_layout();
        layout["version"] = json!("");
        assert!(matches!(
            validate_value(&layout),
            Err(LayoutError::MissingVersion)
        ));
    }

    #[test]
    fn test_rejects_missing_device_id() {
        let mut layout = valid_layout();
        layout["metadata"] = json!({});
        let err = validate_value(&layout).unwrap_err();
        assert_eq!(err.to_string(), "Layout must have metadata with deviceId");
    }

    #[test]
    fn test_rejects_screens_that_are_not_a_sequence() {
        let mut layout = valid_layout();
        layout["screens"] = json!({"main": {}});
        assert!(matches!(
            validate_value(&layout),
            Err(LayoutError::MissingScreens)
        ));
    }

    #[test]
    fn test_rejects_incomplete_screen() {
        let mut layout = valid_layout();
        layout["screens"][0]
            .as_object_mut()
            .unwrap()
            .remove("title");
        assert!(matches!(
            validate_value(&layout),
            Err(LayoutError::ScreenMissingTitle { index: 0 })
        ));

        let mut layout = valid_layout();
        layout["screens"][0]["widgets"] = json!("none");
        assert!(matches!(
            validate_value(&layout),
            Err(LayoutError::ScreenMissingWidgets { index: 0 })
        ));
    }

    #[test]
    fn test_rejects_widget_without_properties() {
        let mut layout = valid_layout();
        layout["screens"][0]["widgets"][0]
            .as_object_mut()
            .unwrap()
            .remove("properties");
        let err = validate_value(&layout).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Widget at index 0 in screen main must have properties"
        );
    }

    #[test]
    fn test_rejects_unknown_widget_type() {
        let mut layout = valid_layout();
        layout["screens"][0]["widgets"][0]["type"] = json!("not-a-real-type");
        let err = validate_value(&layout).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidWidgetType { .. }));
        assert_eq!(
            err.to_string(),
            "Widget at index 0 in screen main has invalid type: not-a-real-type"
        );
    }

    #[test]
    fn test_rejects_known_but_disallowed_widget_types() {
        for widget_type in ["summary", "climate", "actionPanel"] {
            let mut layout = valid_layout();
            layout["screens"][0]["widgets"][0]["type"] = json!(widget_type);
            assert!(validate_value(&layout).is_err(), "{widget_type} accepted");
        }
    }

    #[test]
    fn test_does_not_check_component_id_uniqueness() {
        let mut layout = valid_layout();
        let widget = layout["screens"][0]["widgets"][0].clone();
        layout["screens"][0]["widgets"]
            .as_array_mut()
            .unwrap()
            .push(widget);
        assert!(validate_value(&layout).is_ok());
    }

    #[test]
    fn test_typed_layout_goes_through_same_checks() {
        let mut layout: UiLayout = serde_json::from_value(valid_layout()).unwrap();
        assert!(validate(&layout).is_ok());

        layout.screens[0].widgets[0].widget_type = "not-a-real-type".to_string();
        assert!(matches!(
            validate(&layout),
            Err(LayoutError::InvalidWidgetType { .. })
        ));
    }
}
