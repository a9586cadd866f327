//! Signed bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the user ID as the subject claim and an
//! expiration a fixed number of hours after issuance. The signing secret is
//! read once at startup and shared read-only across requests.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::UserId;

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the authenticated user's ID.
    sub: UserId,
    /// Expiration, seconds since the epoch.
    exp: i64,
    /// Issued-at, seconds since the epoch.
    iat: i64,
}

/// Errors from token verification or issuance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token is past its expiration.
    #[error("Token has expired")]
    Expired,
    /// The signature, format, or subject claim is bad.
    #[error("Could not validate credentials")]
    Invalid,
    /// Token could not be signed (should not happen with HS256).
    #[error("Failed to issue token")]
    Issue,
}

/// Issues and verifies signed identity tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    #[must_use]
    pub fn new(secret: &SecretString, expiry_hours: i64) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry: Duration::hours(expiry_hours),
        }
    }

    /// Issue a token for a user, expiring `expiry_hours` from now.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Issue` if signing fails.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Issue)
    }

    /// Verify a token, returning the subject user ID.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` if the token is past its expiration,
    /// `TokenError::Invalid` for any other signature or format problem.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("k9#mQ2$vX7!pL4@wN8&rT1*uE5^jH3fd")
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = TokenService::new(&secret(), 24);
        let user_id = UserId::generate();

        let token = service.issue(user_id).unwrap();
        assert_eq!(service.verify(&token), Ok(user_id));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative expiry puts the exp claim well past the default leeway.
        let service = TokenService::new(&secret(), -1);

        let token = service.issue(UserId::generate()).unwrap();
        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = TokenService::new(&secret(), 24);
        assert_eq!(service.verify("not-a-token"), Err(TokenError::Invalid));
        assert_eq!(service.verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = TokenService::new(&secret(), 24);
        let other = TokenService::new(
            &SecretString::from("z1!aB8@cD5#eF2$gH9%iJ6^kL3&mN0*q"),
            24,
        );

        let token = issuer.issue(UserId::generate()).unwrap();
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }
}
