use crate::{ConfigError, ConfigErrorResult, DEFAULT_TWILIO_API_BASE_URL};

use serde::Deserialize;

/// Twilio settings. SMS is enabled only when both the account SID and the
/// auth token are present; the sender is checked per request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmsConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    /// Sender phone number or messaging service address
    pub from: Option<String>,
    pub api_base_url: String,
}

/// Account credentials for the provider's REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from: None,
            api_base_url: String::from(DEFAULT_TWILIO_API_BASE_URL),
        }
    }
}

impl SmsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::sms(format!(
                "sms.api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        Ok(())
    }

    /// Credentials, if both halves are configured and non-empty
    pub fn credentials(&self) -> Option<TwilioCredentials> {
        let account_sid = non_empty(&self.account_sid)?;
        let auth_token = non_empty(&self.auth_token)?;

        Some(TwilioCredentials {
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    /// Configured sender, if non-empty
    pub fn sender(&self) -> Option<&str> {
        non_empty(&self.from)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
