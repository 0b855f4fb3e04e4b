use serde::Deserialize;

/// Subset of the Message resource returned on a successful create
#[derive(Debug, Deserialize)]
pub(crate) struct TwilioMessageResponse {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Twilio REST error body
#[derive(Debug, Deserialize)]
pub(crate) struct TwilioErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}
