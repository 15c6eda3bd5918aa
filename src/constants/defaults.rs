pub const LOG_LEVEL: &str = "INFO";

pub const LAYOUT_VERSION: &str = "1.0";
pub const MAIN_SCREEN_ID: &str = "main";
pub const HEADER_TITLE: &str = "Device";
pub const UNKNOWN_DEVICE_ID: &str = "unknown-device";
pub const UNKNOWN_DEVICE_LABEL: &str = "Unknown";

pub const SCHEDULER_DEFAULT_DURATION: u64 = 30;
pub const SCHEDULER_MAX_DURATION: u64 = 120;

pub const CHART_TYPE: &str = "line";
pub const CHART_TIME_RANGE: &str = "1h";

pub const MOCKS_DIR_NAME: &str = "mocks";
pub const OUTPUT_DIR_NAME: &str = "generated-layouts";
pub const LAYOUT_FILE_SUFFIX: &str = "-layout.json";
