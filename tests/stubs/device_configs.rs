#![allow(dead_code)]
// Each test binary only uses some of these fixtures

pub const ENERGY_METER_3P: &str = r#"
{
    "type": "energy-meter",
    "deviceId": "test-meter-001",
    "config": {
        "name": "Test Energy Meter",
        "model": "EM3000",
        "measurements": {
            "voltage": {
                "unit": "V",
                "ranges": {"min": 0, "max": 250, "warning": 235, "critical": 245}
            },
            "current": {
                "unit": "A",
                "ranges": {"min": 0, "max": 100, "warning": 80, "critical": 90}
            },
            "power": {
                "unit": "W",
                "ranges": {"min": 0, "max": 10000, "warning": 8000, "critical": 9000}
            }
        }
    }
}
"#;

pub const SMART_IRRIGATION: &str = r#"
{
    "type": "smart-irrigation",
    "deviceId": "irrigation-001",
    "config": {
        "name": "Garden Irrigation",
        "model": "SI-4Z",
        "zones": [
            {"id": "z1", "name": "Front Lawn", "maxDuration": 30},
            {"id": "z2", "name": "Back Garden", "maxDuration": 45},
            {"id": "z3", "name": "Flower Beds", "maxDuration": 15}
        ],
        "scheduler": {"defaultDuration": 20, "maxDuration": 60}
    }
}
"#;

pub const ENVIRONMENT_SENSOR: &str = r#"
{
    "type": "environment-sensor",
    "deviceId": "env-sensor-001",
    "config": {
        "name": "Greenhouse Sensor",
        "model": "ENV-200",
        "measurements": {
            "temperature": {
                "unit": "°C",
                "ranges": {"min": -10, "max": 45, "warning": 35, "critical": 40}
            },
            "humidity": {
                "unit": "%",
                "ranges": {"min": 0, "max": 100, "warning": 80, "critical": 90}
            }
        },
        "battery": {
            "unit": "%",
            "ranges": {"min": 0, "max": 100, "warning": 20, "critical": 10}
        }
    }
}
"#;

pub const UNSUPPORTED_DEVICE: &str = r#"
{
    "type": "unknown-device",
    "deviceId": "test-device-001",
    "config": {"name": "Unknown Device"}
}
"#;

pub const BAD_THRESHOLDS: &str = r#"
{
    "type": "energy-meter",
    "deviceId": "m2",
    "config": {
        "measurements": {
            "voltage": {
                "unit": "V",
                "ranges": {"min": 0, "max": 250, "warning": 245, "critical": 235}
            }
        }
    }
}
"#;

pub const INVALID_LAYOUT: &str = r#"
{
    "version": "1.0",
    "metadata": {"deviceId": "test-device-001", "lastUpdated": "2024-01-01T00:00:00.000Z"},
    "screens": [{
        "id": "main",
        "title": "Test Screen",
        "widgets": [{"type": "not-a-real-type", "componentId": "widget-1", "properties": {"title": "Test Widget"}}]
    }]
}
"#;
