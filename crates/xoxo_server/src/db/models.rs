//! Database models and the status vocabulary stored per move.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use xoxo_game::{Board, Outcome};

use crate::db::{DbError, schema};

/// User account database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::users)]
pub struct User {
    id: i32,
    username: String,
    password_hash: String,
    created_at: NaiveDateTime,
}

/// Insertable user model for creating new accounts.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::users)]
pub struct NewUser {
    username: String,
    password_hash: String,
}

/// One persisted half-move, with a snapshot of the board after it.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Getters)]
#[diesel(table_name = schema::moves)]
#[diesel(belongs_to(User))]
pub struct StoredMove {
    id: i32,
    user_id: i32,
    row: i32,
    col: i32,
    is_engine: bool,
    status: String,
    board: String,
    created_at: NaiveDateTime,
}

impl StoredMove {
    /// Parses the stored status string into an [`Outcome`].
    pub fn parse_outcome(&self) -> Result<Outcome, DbError> {
        outcome_from_db(self.status())
    }

    /// Parses the stored board snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the snapshot is not a valid board.
    pub fn parse_board(&self) -> Result<Board, DbError> {
        serde_json::from_str(self.board())
            .map_err(|e| DbError::new(format!("Invalid board snapshot: {}", e)))
    }
}

/// Insertable move model for recording half-moves.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::moves)]
pub struct NewMove {
    user_id: i32,
    row: i32,
    col: i32,
    is_engine: bool,
    status: String,
    board: String,
}

/// Converts an outcome to the status string stored per move.
///
/// The vocabulary is the player's perspective: the human plays the
/// maximizer, so a maximizer win is recorded as "won".
pub fn outcome_to_db(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Active => "active",
        Outcome::Tie => "tie",
        Outcome::MaximizerWon => "won",
        Outcome::MinimizerWon => "lost",
    }
}

/// Parses a status string stored in the database.
///
/// # Errors
///
/// Returns [`DbError`] if the string is not a valid status value.
pub fn outcome_from_db(s: &str) -> Result<Outcome, DbError> {
    match s {
        "active" => Ok(Outcome::Active),
        "tie" => Ok(Outcome::Tie),
        "won" => Ok(Outcome::MaximizerWon),
        "lost" => Ok(Outcome::MinimizerWon),
        _ => Err(DbError::new(format!("Invalid status: '{}'", s))),
    }
}
