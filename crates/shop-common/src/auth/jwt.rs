//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! The same token serves as bearer credential and as email-verification link
//! payload, so the claim set stays minimal: user id and username.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
///
/// Carries no `exp` claim: tokens stay valid until the signing secret
/// rotates. Expiry and revocation are out of scope for this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,
    /// Username at the time of issue
    pub username: String,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the given secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        // Tokens carry no exp claim; stock validation would reject them
        // before the signature is even checked.
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Encode a token for a user (HS256)
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn encode_token(&self, user_id: i64, username: &str) -> Result<String, AppError> {
        let claims = Claims {
            id: user_id,
            username: username.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns an error if the signature is invalid or the payload is malformed
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService").finish_non_exhaustive()
    }
}
