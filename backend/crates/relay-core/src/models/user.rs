//! User entity - a registered account held by the user registry.

use serde::Serialize;

/// A registered user.
///
/// `password_hash` holds a one-way salted digest and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub name: String,
    /// Unique within the registry; the lookup key
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Check whether this user is registered under `email` (exact match)
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}
