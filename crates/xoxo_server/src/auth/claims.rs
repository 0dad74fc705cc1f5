//! JWT payload structure.

use serde::{Deserialize, Serialize};

use crate::auth::Crypto;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the username the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// Issues claims for a username, valid for [`Crypto::duration`].
    pub fn new(username: String) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: username,
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }

    /// Username the token names.
    pub fn username(&self) -> &str {
        &self.sub
    }
}
