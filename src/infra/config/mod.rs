pub mod app_config;
pub mod log_dir;

pub use app_config::{ConfigError, TomlConfigLoader};
pub use log_dir::get_log_dir;
