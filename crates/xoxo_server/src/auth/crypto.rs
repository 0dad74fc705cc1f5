//! JWT signing and verification.

use tracing::warn;

use crate::auth::Claims;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// HMAC key pair for access tokens.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    /// Creates a key pair from a shared secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }

    /// Reads the secret from the `JWT_SECRET` environment variable.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET is not set; tokens are signed with an empty secret");
            String::default()
        });
        Self::new(secret.as_bytes())
    }

    /// Signs claims into a compact token.
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }

    /// Access token lifetime.
    pub const fn duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
}
