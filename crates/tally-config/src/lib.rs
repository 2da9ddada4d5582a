pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, InputConfig, InputMode, LoggingConfig, ReportConfig};
pub use paths::{config_dir_override, PathManager};
