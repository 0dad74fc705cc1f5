//! Exhaustive-search engine for NxN tic-tac-toe.
//!
//! The crate has two halves:
//!
//! - **Board state** ([`Board`]): an NxN grid of [`Cell`]s with move
//!   application, move reversal, legal-move enumeration, and line-based
//!   terminal scoring.
//! - **Search** ([`find_best_move`], [`evaluate`]): full-depth minimax over
//!   the board, preferring the fastest forced win and the most delayed
//!   forced loss.
//!
//! The engine mutates one shared board in place and restores it on the way
//! back up the search tree; a board is bit-for-bit identical before and
//! after any search call. Callers that serve multiple simultaneous games
//! must give each game its own [`Board`]; there is no internal locking.
//!
//! # Example
//!
//! ```
//! use xoxo_game::{Board, Move, Outcome, Side, find_best_move};
//!
//! let mut board = Board::default();
//! board.apply(Move::new(0, 0), Side::Maximizer)?;
//! assert_eq!(board.status(), Outcome::Active);
//!
//! let reply = find_best_move(&mut board, Side::Minimizer)
//!     .expect("moves remain");
//! board.apply(reply, Side::Minimizer)?;
//! # Ok::<(), xoxo_game::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod outcome;
mod search;

// Crate-level exports - board state
pub use board::{Board, Cell, Move, Placement, Side};

// Crate-level exports - errors
pub use error::BoardError;

// Crate-level exports - outcome classification
pub use outcome::Outcome;

// Crate-level exports - search
pub use search::{evaluate, find_best_move};
