mod auth_config;
mod client_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

pub mod logger;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".um";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_AUTH_USERNAME: &str = "admin";
const DEFAULT_AUTH_PASSWORD: &str = "admin123";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
