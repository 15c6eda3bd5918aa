mod load_dotenv;
mod time;

pub use load_dotenv::load_dotenv;
pub use time::{now_utc, to_iso};

pub mod base_path;
