use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies HS256 session tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a service signing with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Issued tokens carry no exp
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a token over `{id, email}`
    #[track_caller]
    pub fn issue(&self, id: u64, email: &str) -> AuthErrorResult<String> {
        let claims = Claims::new(id, email);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token's signature and return its claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|source| {
                AuthError::JwtDecode {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
