use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_JWT_SECRET, MAX_BCRYPT_COST,
    MIN_BCRYPT_COST,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for issued tokens
    pub jwt_secret: String,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::auth("auth.jwt_secret cannot be empty"));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// True when still running with the placeholder secret
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
