use super::twilio_response::{TwilioErrorResponse, TwilioMessageResponse};
use crate::{OutboundSms, Result as SmsResult, SentMessage, SmsError, SmsProvider, TwilioOptions};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, error};
use reqwest::Client as ReqwestClient;

/// Twilio Programmable Messaging client.
///
/// Built once at startup and shared; `reqwest::Client` pools connections
/// internally.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    options: TwilioOptions,
    client: ReqwestClient,
}

impl TwilioClient {
    /// Create a new client
    #[track_caller]
    pub fn new(options: TwilioOptions) -> SmsResult<Self> {
        let client = ReqwestClient::builder()
            .user_agent(concat!("relay-sms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SmsError::ClientBuild {
                message: source.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source,
            })?;

        Ok(Self { options, client })
    }

    pub fn account_sid(&self) -> &str {
        &self.options.account_sid
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.options.api_base_url.trim_end_matches('/'),
            self.options.account_sid
        )
    }
}

#[async_trait]
impl SmsProvider for TwilioClient {
    async fn send(&self, sms: &OutboundSms) -> SmsResult<SentMessage> {
        let form = [
            ("To", sms.to.as_str()),
            ("From", sms.from.as_str()),
            ("Body", sms.body.as_str()),
        ];

        debug!("Twilio: sending message to {}", sms.to);

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Twilio error ({}): {}", status, body);

            let (code, message) = match serde_json::from_str::<TwilioErrorResponse>(&body) {
                Ok(err) => (err.code, err.message),
                Err(_) => (None, format!("Twilio returned HTTP {}", status.as_u16())),
            };

            return Err(SmsError::Provider {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let message: TwilioMessageResponse =
            serde_json::from_str(&body).map_err(|e| SmsError::Decode {
                message: format!("Failed to parse Twilio response: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Twilio: accepted message {}", message.sid);

        Ok(SentMessage {
            sid: message.sid,
            status: message.status,
        })
    }

    fn name(&self) -> &'static str {
        "twilio"
    }
}
