pub mod claims;
pub mod error;
pub mod password_hasher;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password_hasher::{DEFAULT_BCRYPT_COST, PasswordHasher};
pub use token_service::TokenService;
