//! Bearer Tokens
//!
//! HS256-signed JWTs carrying the user id as `sub`.
//!
//! Verification checks signature, `exp` and `nbf` with zero leeway, and
//! requires issuer and audience to equal the configured identifier.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Issuer and audience written into every token
pub const DEFAULT_TOKEN_IDENTIFIER: &str = "auction-go";

/// Default validity window
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Registered claims of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is not valid yet")]
    NotYetValid,

    #[error("token is invalid: {0}")]
    Invalid(String),

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::ImmatureSignature => TokenError::NotYetValid,
            _ => TokenError::Invalid(err.to_string()),
        }
    }
}

/// Signs and verifies access tokens with a shared HMAC secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    identifier: String,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], identifier: impl Into<String>, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            identifier: identifier.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from now
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        let issued = now.timestamp();

        let claims = Claims {
            sub: subject.to_owned(),
            iat: issued,
            nbf: issued,
            exp: (now + ttl).timestamp(),
            iss: self.identifier.clone(),
            aud: self.identifier.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature, time window, issuer and audience
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.identifier.as_str()]);
        validation.set_audience(&[self.identifier.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss", "aud"]);

        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("identifier", &self.identifier)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(secret: &[u8]) -> TokenSigner {
        TokenSigner::new(secret, DEFAULT_TOKEN_IDENTIFIER, DEFAULT_TOKEN_TTL)
    }

    #[test]
    fn test_issue_and_verify() {
        let signer = signer(b"test-secret");
        let token = signer.issue("42").unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, DEFAULT_TOKEN_IDENTIFIER);
        assert_eq!(claims.aud, DEFAULT_TOKEN_IDENTIFIER);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = signer(b"secret-a").issue("1").unwrap();
        assert!(matches!(
            signer(b"secret-b").verify(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = signer(b"test-secret");
        let token = signer
            .issue_at("1", Utc::now() - chrono::Duration::hours(25))
            .unwrap();
        assert!(matches!(signer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_future_token_is_rejected() {
        let signer = signer(b"test-secret");
        let token = signer
            .issue_at("1", Utc::now() + chrono::Duration::hours(1))
            .unwrap();
        assert!(matches!(signer.verify(&token), Err(TokenError::NotYetValid)));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let other = TokenSigner::new(b"test-secret", "someone-else", DEFAULT_TOKEN_TTL);
        let token = other.issue("1").unwrap();
        assert!(signer(b"test-secret").verify(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            signer(b"test-secret").verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }
}
