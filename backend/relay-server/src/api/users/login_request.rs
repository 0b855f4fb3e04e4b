use crate::api::present;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// `(email, password)`, or `None` if either is missing or empty
    pub fn into_credentials(self) -> Option<(String, String)> {
        Some((present(self.email)?, present(self.password)?))
    }
}
