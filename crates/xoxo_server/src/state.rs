//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::auth::Crypto;
use crate::db::GameRepository;

/// State threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    repo: GameRepository,
    crypto: Arc<Crypto>,
}

impl AppState {
    /// Creates state from a repository and token keys.
    pub fn new(repo: GameRepository, crypto: Crypto) -> Self {
        Self {
            repo,
            crypto: Arc::new(crypto),
        }
    }

    /// The database repository.
    pub fn repo(&self) -> &GameRepository {
        &self.repo
    }

    /// The token signing and verification keys.
    pub fn crypto(&self) -> &Crypto {
        &self.crypto
    }
}
