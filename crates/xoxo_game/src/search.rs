//! Full-depth minimax over the board.
//!
//! The search is exhaustive: full width, full depth, no pruning and no
//! caching. That is acceptable because the tree is bounded by the number
//! of move orderings (9! on the canonical 3x3 grid); anything larger
//! needs a move or time budget and is out of scope here.

use tracing::{debug, instrument};

use crate::board::{Board, Move, Side};
use crate::outcome::TIE_SCORE;

/// Computes the minimax value of the position for the player to move.
///
/// `maximizing` names the player whose turn it is at this node; `depth` is
/// the number of plies already played in the current branch. Terminal
/// positions return their [`Board::position_score`] directly; interior
/// nodes take the maximum of child values when maximizing and the minimum
/// otherwise.
///
/// Every speculative placement is released before the call returns, so the
/// board is bit-for-bit identical before and after evaluation.
pub fn evaluate(board: &mut Board, depth: u8, maximizing: bool) -> i32 {
    if let Some(score) = board.position_score(depth) {
        return score;
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        // position_score already reports full boards as ties; kept as a
        // defensive fallback.
        return TIE_SCORE;
    }

    let side = if maximizing {
        Side::Maximizer
    } else {
        Side::Minimizer
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let mut placed = board
            .place(mv, side)
            .expect("legal move targets an empty cell");
        let value = evaluate(placed.board(), depth + 1, !maximizing);
        drop(placed);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Picks the optimal move for `to_move`, or `None` when the board offers
/// no legal moves.
///
/// Each legal root move is applied, evaluated with the opponent to move,
/// and undone. The maximizer keeps the move with the strictly greatest
/// value, the minimizer the strictly least; on equal values the earliest
/// move in enumeration order wins. Callers should check [`Board::status`]
/// first, since this function has no notion of finished games beyond an
/// empty move list.
#[instrument(skip(board))]
pub fn find_best_move(board: &mut Board, to_move: Side) -> Option<Move> {
    let reply_maximizes = to_move == Side::Minimizer;

    let mut best: Option<(Move, i32)> = None;
    for mv in board.legal_moves() {
        let mut placed = board
            .place(mv, to_move)
            .expect("legal move targets an empty cell");
        let value = evaluate(placed.board(), 0, reply_maximizes);
        drop(placed);

        let improves = match best {
            None => true,
            Some((_, incumbent)) => match to_move {
                Side::Maximizer => value > incumbent,
                Side::Minimizer => value < incumbent,
            },
        };
        if improves {
            best = Some((mv, value));
        }
    }

    if let Some((mv, value)) = best {
        debug!(row = mv.row, col = mv.col, value, "best move selected");
    }
    best.map(|(mv, _)| mv)
}
