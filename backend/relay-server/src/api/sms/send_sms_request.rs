use crate::api::present;

use serde::Deserialize;

/// Contact-form submission relayed as a text message
#[derive(Debug, Default, Deserialize)]
pub struct SendSmsRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Destination phone number
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: String,
}

impl SendSmsRequest {
    pub fn into_message(self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: present(self.name)?,
            email: present(self.email)?,
            message: present(self.message)?,
            phone: present(self.phone)?,
        })
    }
}

impl ContactMessage {
    /// Text delivered to the recipient
    pub fn body(&self) -> String {
        format!("Contact from {} ({}): {}", self.name, self.email, self.message)
    }
}
