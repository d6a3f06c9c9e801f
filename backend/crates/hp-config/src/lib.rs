mod config;
mod error;
mod log_level;
mod logging_config;
mod routes_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::{RouteEntryConfig, RoutesConfig};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "HP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hp";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_INCLUDE_OPTIONAL_ROUTES: bool = false;
