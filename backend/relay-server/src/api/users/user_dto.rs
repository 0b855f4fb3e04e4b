use relay_core::User;

use serde::Serialize;

/// Public view of a user; the password hash never leaves the server
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
