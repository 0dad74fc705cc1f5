//! Database persistence layer for user accounts and move history.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub use error::DbError;
pub use models::{NewMove, NewUser, StoredMove, User, outcome_from_db, outcome_to_db};
pub use repository::GameRepository;

/// Embedded schema migrations, applied at startup and in tests.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies pending migrations to the database at `db_path`.
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or a migration
/// fails to apply.
pub fn run_migrations(db_path: &str) -> Result<(), DbError> {
    let mut conn = SqliteConnection::establish(db_path)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
    Ok(())
}
