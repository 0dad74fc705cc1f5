//! Tests for the request-level game loop: player and engine half-moves,
//! and resuming games from persisted history.

use tempfile::NamedTempFile;
use xoxo_game::{Board, BoardError, Cell, Move, Outcome, Side};
use xoxo_server::{
    GameRepository, NewMove, apply_engine_reply, apply_player_move, outcome_to_db, resume_or_new,
    run_migrations,
};

const X: Option<Side> = Some(Side::Maximizer);
const O: Option<Side> = Some(Side::Minimizer);
const E: Option<Side> = None;

/// Builds a 3x3 board from rows listed top-to-bottom.
fn board_from(rows: [[Option<Side>; 3]; 3]) -> Board {
    let mut board = Board::new(3);
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(side) = cell {
                board
                    .apply(Move::new(row, col), *side)
                    .expect("cell is empty");
            }
        }
    }
    board
}

fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    run_migrations(&db_path).expect("Migrations failed");
    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

#[test]
fn test_player_move_applies_and_reports_status() {
    let mut board = Board::new(3);
    let status = apply_player_move(&mut board, Move::new(1, 1)).expect("cell is empty");
    assert_eq!(status, Outcome::Active);
    assert_eq!(
        board.get(Move::new(1, 1)),
        Some(Cell::Occupied(Side::Maximizer))
    );

    let mut winning = board_from([[X, X, E], [O, O, E], [E, E, E]]);
    let status = apply_player_move(&mut winning, Move::new(0, 2)).expect("cell is empty");
    assert_eq!(status, Outcome::MaximizerWon);
}

#[test]
fn test_player_move_on_occupied_cell_propagates() {
    let mut board = Board::new(3);
    apply_player_move(&mut board, Move::new(0, 0)).expect("cell is empty");
    let result = apply_player_move(&mut board, Move::new(0, 0));
    assert_eq!(result, Err(BoardError::OccupiedCell(Move::new(0, 0))));
}

#[test]
fn test_engine_reply_blocks_open_row() {
    // The player threatens the top row; the engine must block at (0, 2).
    let mut board = board_from([[X, X, E], [E, O, E], [E, E, E]]);
    let (mv, status) = apply_engine_reply(&mut board)
        .expect("board accepts the move")
        .expect("moves remain");
    assert_eq!(mv, Move::new(0, 2));
    assert_eq!(status, Outcome::Active);
    assert_eq!(
        board.get(Move::new(0, 2)),
        Some(Cell::Occupied(Side::Minimizer))
    );
}

#[test]
fn test_engine_reply_none_on_full_board() {
    let mut board = board_from([[X, O, X], [O, O, X], [X, X, O]]);
    let reply = apply_engine_reply(&mut board).expect("nothing to apply");
    assert!(reply.is_none());
}

#[test]
fn test_resume_continues_active_game() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("alice".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    let mut persisted = Board::new(3);
    persisted
        .apply(Move::new(1, 1), Side::Maximizer)
        .expect("cell is empty");
    repo.record_move(NewMove::new(
        *user.id(),
        1,
        1,
        false,
        outcome_to_db(Outcome::Active).to_string(),
        serde_json::to_string(&persisted).expect("board serializes"),
    ))
    .expect("Record failed");

    let resumed = resume_or_new(&repo, *user.id(), 3).expect("Resume failed");
    assert_eq!(resumed, persisted);
}

#[test]
fn test_finished_game_starts_fresh_board() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("bob".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    let finished = board_from([[X, X, X], [O, O, E], [E, E, E]]);
    repo.record_move(NewMove::new(
        *user.id(),
        0,
        2,
        false,
        outcome_to_db(Outcome::MaximizerWon).to_string(),
        serde_json::to_string(&finished).expect("board serializes"),
    ))
    .expect("Record failed");

    let board = resume_or_new(&repo, *user.id(), 3).expect("Resume failed");
    assert_eq!(board, Board::new(3));
}

#[test]
fn test_no_history_starts_fresh_board() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("carol".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    let board = resume_or_new(&repo, *user.id(), 3).expect("Resume failed");
    assert_eq!(board, Board::new(3));
}

#[test]
fn test_full_turn_keeps_game_active() {
    // A full request-shaped turn against a fresh board: the player opens,
    // the engine answers, and the game continues.
    let mut board = Board::new(3);
    let status = apply_player_move(&mut board, Move::new(0, 0)).expect("cell is empty");
    assert_eq!(status, Outcome::Active);

    let (mv, status) = apply_engine_reply(&mut board)
        .expect("board accepts the move")
        .expect("moves remain");
    assert_eq!(status, Outcome::Active);
    assert_eq!(board.get(mv), Some(Cell::Occupied(Side::Minimizer)));
    assert_eq!(board.legal_moves().len(), 7);
}
