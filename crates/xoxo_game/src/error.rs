//! Error types for board operations.

use crate::board::Move;

/// Errors raised when writing a mark to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The target cell already holds a mark.
    ///
    /// Always a caller-logic error: the proposed move targets a cell that
    /// was filled earlier in the game. Callers must surface it rather than
    /// drop it, or the board silently diverges from the actor's intent.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(Move),

    /// The coordinate lies outside the grid.
    #[display("cell {_0} is outside the board")]
    OutOfBounds(Move),
}

impl std::error::Error for BoardError {}
