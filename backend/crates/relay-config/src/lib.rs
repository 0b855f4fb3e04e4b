mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sms_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sms_config::{SmsConfig, TwilioCredentials};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "RELAY_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".relay";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const MIN_PORT: u16 = 1024;

/// Insecure placeholder; startup warns while it is in use.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";
const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
