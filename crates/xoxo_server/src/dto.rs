//! Request and response schemas for the HTTP API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use xoxo_game::{Board, Cell, Move, Outcome};

use crate::db::{StoredMove, outcome_to_db};

/// Form body for registration and login.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Account name, 3-50 word characters.
    pub username: String,
    /// Plaintext password, hashed server-side.
    pub password: String,
}

/// Issued bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Compact JWT.
    pub access_token: String,
    /// Always "bearer".
    pub token_type: String,
}

/// One turn request: the player's move, if any, and the board size when
/// starting a fresh game.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayRequest {
    /// Target row of the player's move.
    pub row: Option<usize>,
    /// Target column of the player's move.
    pub col: Option<usize>,
    /// Board side length for a fresh game.
    pub size: Option<usize>,
}

impl PlayRequest {
    /// The player's move, present when both coordinates are supplied.
    pub fn player_move(&self) -> Option<Move> {
        match (self.row, self.col) {
            (Some(row), Some(col)) => Some(Move::new(row, col)),
            _ => None,
        }
    }
}

/// Result of one turn.
#[derive(Debug, Clone, Serialize)]
pub struct PlayResponse {
    /// Game status after the turn.
    pub status: &'static str,
    /// The engine's reply, when it moved.
    #[serde(rename = "move")]
    pub engine_move: Option<Move>,
    /// Board rows after the turn, top-to-bottom.
    pub board: Vec<Vec<Cell>>,
}

impl PlayResponse {
    /// Builds a response from the final board state.
    pub fn new(status: Outcome, engine_move: Option<Move>, board: &Board) -> Self {
        Self {
            status: outcome_to_db(status),
            engine_move,
            board: board
                .cells()
                .chunks(board.size())
                .map(|row| row.to_vec())
                .collect(),
        }
    }
}

/// Persisted half-move returned from the history endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    /// Row of the move.
    pub row: i32,
    /// Column of the move.
    pub col: i32,
    /// Whether the engine made the move.
    pub is_engine: bool,
    /// Game status after the move.
    pub status: String,
    /// When the move was recorded.
    pub created_at: NaiveDateTime,
}

impl From<&StoredMove> for MoveRecord {
    fn from(mv: &StoredMove) -> Self {
        Self {
            row: *mv.row(),
            col: *mv.col(),
            is_engine: *mv.is_engine(),
            status: mv.status().clone(),
            created_at: *mv.created_at(),
        }
    }
}

/// Current user profile.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// Database id.
    pub id: i32,
    /// Account name.
    pub username: String,
}
