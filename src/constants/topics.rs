const DEVICE_PREFIX: &str = "iot/device";

pub fn measurement(device_type: &str, key: &str) -> String {
    format!("{DEVICE_PREFIX}/{device_type}/{key}")
}

pub fn zone_state(device_type: &str, zone_id: &str) -> String {
    format!("{DEVICE_PREFIX}/{device_type}/zone/{zone_id}/state")
}

pub fn schedule(device_type: &str) -> String {
    format!("{DEVICE_PREFIX}/{device_type}/schedule")
}

pub fn battery(device_type: &str) -> String {
    format!("{DEVICE_PREFIX}/{device_type}/battery")
}
