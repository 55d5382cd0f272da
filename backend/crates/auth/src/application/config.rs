//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::{DEFAULT_TOKEN_IDENTIFIER, DEFAULT_TOKEN_TTL, TokenSigner};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for bearer tokens
    pub jwt_secret: Vec<u8>,
    /// Issuer and audience claim
    pub token_identifier: String,
    /// Token validity window (24 hours)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_identifier: DEFAULT_TOKEN_IDENTIFIER.to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random secret (for development)
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec())
    }

    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.jwt_secret, self.token_identifier.clone(), self.token_ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_identifier", &self.token_identifier)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
