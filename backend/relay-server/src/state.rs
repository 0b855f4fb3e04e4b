//! Shared handler state

use relay_auth::{PasswordHasher, TokenService};
use relay_config::{Config, SmsConfig};
use relay_core::{InMemoryUserStore, UserStore};
use relay_sms::{SmsProvider, TwilioClient, TwilioOptions};

use std::sync::Arc;

use log::{info, warn};

/// Everything a handler needs, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
    pub password_hasher: PasswordHasher,
    /// `None` when Twilio credentials are absent or the client failed to build
    pub sms: Option<Arc<dyn SmsProvider>>,
    /// Sender address, checked per request
    pub sms_from: Option<String>,
}

impl AppState {
    /// Wire production dependencies from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            tokens: Arc::new(TokenService::with_hs256(config.auth.jwt_secret.as_bytes())),
            password_hasher: PasswordHasher::new(config.auth.bcrypt_cost),
            sms: sms_provider_from_config(&config.sms),
            sms_from: config.sms.sender().map(String::from),
        }
    }
}

/// Build the Twilio client if credentials are configured.
///
/// A client that fails to build leaves SMS disabled instead of aborting startup.
pub fn sms_provider_from_config(sms: &SmsConfig) -> Option<Arc<dyn SmsProvider>> {
    let Some(credentials) = sms.credentials() else {
        warn!("Twilio credentials not set; /send-sms will answer 500 until configured");
        return None;
    };

    let options = TwilioOptions::new(credentials.account_sid, credentials.auth_token)
        .with_api_base_url(sms.api_base_url.clone());

    match TwilioClient::new(options) {
        Ok(client) => {
            info!("SMS: Twilio client ready for account {}", client.account_sid());
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!("Failed to initialize Twilio client, SMS disabled: {}", e);
            None
        }
    }
}
