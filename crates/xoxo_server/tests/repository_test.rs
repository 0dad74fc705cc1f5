//! Tests for database repository operations.

use tempfile::NamedTempFile;
use xoxo_game::{Board, Move, Outcome, Side};
use xoxo_server::{GameRepository, NewMove, outcome_from_db, outcome_to_db, run_migrations};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    run_migrations(&db_path).expect("Migrations failed");

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

fn board_snapshot() -> String {
    let mut board = Board::new(3);
    board
        .apply(Move::new(1, 1), Side::Maximizer)
        .expect("cell is empty");
    serde_json::to_string(&board).expect("board serializes")
}

#[test]
fn test_create_user() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("alice".to_string(), "phc-hash".to_string())
        .expect("Create failed");
    assert_eq!(user.username(), "alice");
    assert!(*user.id() > 0);
}

#[test]
fn test_create_user_duplicate_name_fails() {
    let (_db, repo) = setup_test_db();
    repo.create_user("bob".to_string(), "phc-hash".to_string())
        .expect("First create failed");
    let result = repo.create_user("bob".to_string(), "other-hash".to_string());
    assert!(result.is_err(), "Duplicate username should fail");
}

#[test]
fn test_get_user_by_name_found() {
    let (_db, repo) = setup_test_db();
    repo.create_user("carol".to_string(), "phc-hash".to_string())
        .expect("Create failed");
    let found = repo.get_user_by_name("carol").expect("Query failed");
    assert!(found.is_some());
    assert_eq!(found.unwrap().username(), "carol");
}

#[test]
fn test_get_user_by_name_not_found() {
    let (_db, repo) = setup_test_db();
    let found = repo.get_user_by_name("nobody").expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_record_move_round_trips_board_and_status() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("dave".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    let stored = repo
        .record_move(NewMove::new(
            *user.id(),
            1,
            1,
            false,
            outcome_to_db(Outcome::Active).to_string(),
            board_snapshot(),
        ))
        .expect("Record failed");

    assert_eq!(*stored.row(), 1);
    assert_eq!(*stored.col(), 1);
    assert!(!*stored.is_engine());
    assert_eq!(stored.parse_outcome().expect("status parses"), Outcome::Active);

    let board = stored.parse_board().expect("board parses");
    assert_eq!(board.size(), 3);
    assert_eq!(
        board.get(Move::new(1, 1)),
        Some(xoxo_game::Cell::Occupied(Side::Maximizer))
    );
}

#[test]
fn test_latest_move_returns_most_recent() {
    let (_db, repo) = setup_test_db();
    let user = repo
        .create_user("erin".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    assert!(repo.latest_move(*user.id()).expect("Query failed").is_none());

    repo.record_move(NewMove::new(
        *user.id(),
        0,
        0,
        false,
        "active".to_string(),
        board_snapshot(),
    ))
    .expect("Record failed");
    repo.record_move(NewMove::new(
        *user.id(),
        2,
        2,
        true,
        "active".to_string(),
        board_snapshot(),
    ))
    .expect("Record failed");

    let latest = repo
        .latest_move(*user.id())
        .expect("Query failed")
        .expect("Move exists");
    assert_eq!(*latest.row(), 2);
    assert_eq!(*latest.col(), 2);
    assert!(*latest.is_engine());
}

#[test]
fn test_list_moves_most_recent_first_and_scoped_to_user() {
    let (_db, repo) = setup_test_db();
    let frank = repo
        .create_user("frank".to_string(), "phc-hash".to_string())
        .expect("Create failed");
    let grace = repo
        .create_user("grace".to_string(), "phc-hash".to_string())
        .expect("Create failed");

    for col in 0..3 {
        repo.record_move(NewMove::new(
            *frank.id(),
            0,
            col,
            false,
            "active".to_string(),
            board_snapshot(),
        ))
        .expect("Record failed");
    }
    repo.record_move(NewMove::new(
        *grace.id(),
        2,
        2,
        false,
        "active".to_string(),
        board_snapshot(),
    ))
    .expect("Record failed");

    let moves = repo.list_moves(*frank.id()).expect("Query failed");
    assert_eq!(moves.len(), 3);
    let cols: Vec<i32> = moves.iter().map(|mv| *mv.col()).collect();
    assert_eq!(cols, vec![2, 1, 0]);
}

#[test]
fn test_status_vocabulary_round_trip() {
    for outcome in [
        Outcome::Active,
        Outcome::Tie,
        Outcome::MaximizerWon,
        Outcome::MinimizerWon,
    ] {
        let parsed = outcome_from_db(outcome_to_db(outcome)).expect("round trip");
        assert_eq!(parsed, outcome);
    }
    assert!(outcome_from_db("victory").is_err());
}
