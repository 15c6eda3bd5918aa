use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Widget properties: an open mapping interpreted by the renderer
pub type Properties = Map<String, Value>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct UiLayout {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub screens: Vec<UiScreen>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    pub device_id: String,
    pub last_updated: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct UiScreen {
    pub id: String,
    pub title: String,
    pub widgets: Vec<UiWidget>,
}

impl UiScreen {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        UiScreen {
            id: id.into(),
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    pub fn push(&mut self, widget: UiWidget) {
        self.widgets.push(widget);
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiWidget {
    // Kept as a plain string so that layouts read back from JSON can carry
    // types the validator must reject
    #[serde(rename = "type")]
    pub widget_type: String,
    pub component_id: String,
    pub properties: Properties,
}

impl UiWidget {
    pub fn new(kind: WidgetKind, component_id: impl Into<String>, properties: Properties) -> Self {
        UiWidget {
            widget_type: kind.to_string(),
            component_id: component_id.into(),
            properties,
        }
    }

    pub fn kind(&self) -> Option<WidgetKind> {
        self.widget_type.parse().ok()
    }
}

/// Every widget kind the renderer knows about.
///
/// Not all of these are accepted by the layout validator, see
/// `constants::widgets::ALLOWED_TYPES`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    Header,
    Gauge,
    Toggle,
    Scheduler,
    Status,
    Chart,
    Summary,
    Video,
    Climate,
    ActionPanel,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Gauge => "gauge",
            Self::Toggle => "toggle",
            Self::Scheduler => "scheduler",
            Self::Status => "status",
            Self::Chart => "chart",
            Self::Summary => "summary",
            Self::Video => "video",
            Self::Climate => "climate",
            Self::ActionPanel => "actionPanel",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WidgetKind {
    type Err = &'static str;
    fn from_str(value: &str) -> Result<Self, &'static str> {
        match value {
            "header" => Ok(Self::Header),
            "gauge" => Ok(Self::Gauge),
            "toggle" => Ok(Self::Toggle),
            "scheduler" => Ok(Self::Scheduler),
            "status" => Ok(Self::Status),
            "chart" => Ok(Self::Chart),
            "summary" => Ok(Self::Summary),
            "video" => Ok(Self::Video),
            "climate" => Ok(Self::Climate),
            "actionPanel" => Ok(Self::ActionPanel),
            _ => Err("invalid value"),
        }
    }
}

/// Flat component entry of the legacy layout shape
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct UiComponent {
    #[serde(rename = "type")]
    pub component_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Properties>,
}
