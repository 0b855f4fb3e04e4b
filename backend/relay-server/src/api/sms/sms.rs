//! SMS relay handler

use crate::{ApiError, ApiResult, AppState, JsonBody, SendSmsRequest, SendSmsResponse};

use relay_sms::OutboundSms;

use axum::{Json, extract::State};
use log::info;

pub const SMS_FIELDS_REQUIRED: &str = "Missing required fields: name, email, message, phone";
pub const SMS_NOT_CONFIGURED: &str =
    "Twilio client not configured. Set TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN.";
pub const SMS_SENDER_NOT_SET: &str = "TWILIO_FROM not set in environment";

/// POST /send-sms
///
/// Forward a contact-form message to a phone number. Not retried on failure.
pub async fn send_sms(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SendSmsRequest>,
) -> ApiResult<Json<SendSmsResponse>> {
    let contact = request
        .into_message()
        .ok_or_else(|| ApiError::validation(SMS_FIELDS_REQUIRED))?;

    let provider = state
        .sms
        .as_ref()
        .ok_or_else(|| ApiError::not_configured(SMS_NOT_CONFIGURED))?;

    let from = state
        .sms_from
        .clone()
        .ok_or_else(|| ApiError::not_configured(SMS_SENDER_NOT_SET))?;

    let sms = OutboundSms {
        body: contact.body(),
        from,
        to: contact.phone,
    };

    let sent = provider.send(&sms).await?;

    info!("SMS {} sent to {} via {}", sent.sid, sms.to, provider.name());

    Ok(Json(SendSmsResponse {
        success: true,
        sid: sent.sid,
    }))
}
