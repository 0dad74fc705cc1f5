//! The per-request slice of the game loop.
//!
//! The serving layer owns turn order: the human plays the maximizer, the
//! engine plays the minimizer, and the engine only moves while the game
//! is active. The core engine sees one owned board per request and nothing
//! else.

use tracing::{debug, instrument};
use xoxo_game::{Board, BoardError, Move, Outcome, Side, find_best_move};

use crate::db::{DbError, GameRepository};

/// Resumes the caller's active game, or starts a fresh board of the given
/// size.
///
/// # Errors
///
/// Returns [`DbError`] if history cannot be loaded or a stored snapshot
/// fails to parse.
#[instrument(skip(repo))]
pub fn resume_or_new(repo: &GameRepository, user_id: i32, size: usize) -> Result<Board, DbError> {
    match repo.latest_move(user_id)? {
        Some(last) if last.parse_outcome()? == Outcome::Active => {
            debug!(user_id, "Resuming active game");
            last.parse_board()
        }
        _ => {
            debug!(user_id, size, "Starting fresh game");
            Ok(Board::new(size))
        }
    }
}

/// Applies the player's move for the maximizer and reports the resulting
/// status.
///
/// # Errors
///
/// Propagates [`BoardError`] unchanged. An occupied target cell must reach
/// the caller rather than being dropped, or the board would silently
/// diverge from the player's intent.
pub fn apply_player_move(board: &mut Board, mv: Move) -> Result<Outcome, BoardError> {
    board.apply(mv, Side::Maximizer)?;
    Ok(board.status())
}

/// Computes and applies the engine's reply for the minimizer.
///
/// Returns the move made and the resulting status, or `None` when the
/// board offers no legal moves. Callers must only invoke this while the
/// game is active.
///
/// # Errors
///
/// Propagates [`BoardError`] from applying the chosen move.
pub fn apply_engine_reply(board: &mut Board) -> Result<Option<(Move, Outcome)>, BoardError> {
    match find_best_move(board, Side::Minimizer) {
        Some(mv) => {
            board.apply(mv, Side::Minimizer)?;
            Ok(Some((mv, board.status())))
        }
        None => Ok(None),
    }
}
