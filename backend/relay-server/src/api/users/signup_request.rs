use crate::api::present;

use serde::Deserialize;

/// Signup payload. Every field is required; absence is reported by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Signup fields after presence checks
#[derive(Debug)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// All fields, or `None` if any is missing, null or empty
    pub fn into_fields(self) -> Option<SignupFields> {
        Some(SignupFields {
            name: present(self.name)?,
            email: present(self.email)?,
            password: present(self.password)?,
        })
    }
}
