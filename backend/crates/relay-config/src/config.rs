use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, LoggingConfig, ServerConfig, SmsConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub sms: SmsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RELAY_CONFIG_DIR env var, else use ./.relay/
    /// 2. Load config.toml from that directory if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RELAY_CONFIG_DIR env var > ./.relay/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.sms.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  auth: HS256 tokens, bcrypt cost {}", self.auth.bcrypt_cost);

        if self.auth.uses_default_secret() {
            warn!("  auth: JWT_SECRET is the insecure default - set it before deploying");
        }

        let sms_state = match (self.sms.credentials(), self.sms.sender()) {
            (Some(_), Some(from)) => format!("enabled (from {})", from),
            (Some(_), None) => String::from("credentials set, sender missing"),
            (None, _) => String::from("disabled"),
        };
        info!("  sms: {} via {}", sms_state, self.sms.api_base_url);

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("RELAY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("API_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_string("JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("RELAY_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        // SMS
        Self::apply_env_option_string("TWILIO_ACCOUNT_SID", &mut self.sms.account_sid);
        Self::apply_env_option_string("TWILIO_AUTH_TOKEN", &mut self.sms.auth_token);
        Self::apply_env_option_string("TWILIO_FROM", &mut self.sms.from);
        Self::apply_env_string("TWILIO_API_BASE_URL", &mut self.sms.api_base_url);

        // Logging
        Self::apply_env_parse("RELAY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RELAY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RELAY_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.is_empty());
        }
    }
}
