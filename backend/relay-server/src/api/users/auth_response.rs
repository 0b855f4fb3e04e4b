use crate::UserDto;

use serde::Serialize;

/// Returned by both signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
