use serde::Serialize;

/// A text message ready to hand to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundSms {
    pub body: String,
    pub from: String,
    pub to: String,
}

/// Provider acknowledgement of an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Provider-assigned message id
    pub sid: String,
    /// Initial delivery status reported by the provider, e.g. "queued"
    pub status: Option<String>,
}
