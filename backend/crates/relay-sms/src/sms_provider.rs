use crate::{OutboundSms, Result as SmsResult, SentMessage};

use async_trait::async_trait;

/// Something that can deliver an SMS. No retries: one call, one attempt.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    async fn send(&self, sms: &OutboundSms) -> SmsResult<SentMessage>;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}
