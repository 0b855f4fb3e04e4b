use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt password hashing.
///
/// Hashing and verification are CPU-bound, so both run on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `password` with a fresh random salt
    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::HashingTask {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|source| AuthError::Hashing {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Check `password` against a stored bcrypt digest
    pub async fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::HashingTask {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|source| AuthError::Hashing {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
