use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SendSmsResponse {
    pub success: bool,
    /// Provider message identifier
    pub sid: String,
}
