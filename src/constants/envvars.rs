pub const LOGGING_LEVEL: &str = "LOGGING_LEVEL";

pub const ROOT_DIR: &str = "UIGEN_ROOT_DIR";
pub const MOCKS_DIR: &str = "UIGEN_MOCKS_DIR";
pub const OUTPUT_DIR: &str = "UIGEN_OUTPUT_DIR";
