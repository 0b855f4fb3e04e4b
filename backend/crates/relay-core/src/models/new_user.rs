use crate::{CoreError, Result as CoreErrorResult, User};

use std::panic::Location;

use error_location::ErrorLocation;

/// A user that has not been assigned an id yet.
///
/// The password must already be hashed by the time one of these exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    #[track_caller]
    pub fn new(name: String, email: String, password_hash: String) -> CoreErrorResult<Self> {
        for (field, value) in [
            ("name", &name),
            ("email", &email),
            ("password_hash", &password_hash),
        ] {
            if value.is_empty() {
                return Err(CoreError::Validation {
                    message: format!("{field} cannot be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(Self {
            name,
            email,
            password_hash,
        })
    }

    /// Attach the registry-assigned id
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
