//! XOXO game server: REST API, JWT authentication, and move-history
//! persistence around the [`xoxo_game`] engine.
//!
//! # Architecture
//!
//! - **Routes**: axum handlers for register / login / play / history
//! - **Auth**: Argon2 password hashing and bearer-token issuance
//! - **Db**: Diesel/SQLite repository for users and per-move board snapshots
//! - **Play**: the per-request slice of the game loop; the human plays the
//!   maximizer, the engine answers as the minimizer
//!
//! The engine itself lives in [`xoxo_game`] and knows nothing about users,
//! tokens, or storage; this crate reconstructs an owned board per request
//! from the caller's persisted history and hands it to the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod auth;
mod cli;
mod db;
mod dto;
mod error;
mod play;
mod routes;
mod state;

// Crate-level exports - authentication
pub use auth::{AuthUser, Claims, Crypto, password};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - persistence
pub use db::{
    DbError, GameRepository, NewMove, NewUser, StoredMove, User, outcome_from_db, outcome_to_db,
    run_migrations,
};

// Crate-level exports - API schemas
pub use dto::{Credentials, MoveRecord, PlayRequest, PlayResponse, TokenResponse, UserInfo};

// Crate-level exports - HTTP errors
pub use error::ApiError;

// Crate-level exports - game loop
pub use play::{apply_engine_reply, apply_player_move, resume_or_new};

// Crate-level exports - router and state
pub use routes::router;
pub use state::AppState;
