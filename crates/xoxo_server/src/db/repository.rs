//! Database repository for user accounts and persisted move history.

use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::{DbError, NewMove, NewUser, StoredMove, User, schema};

/// Repository for user and move-history operations.
///
/// Opens a fresh SQLite connection per operation. Use `":memory:"` for an
/// in-memory database (useful for tests).
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Creates a new user account with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the username is already taken or a database
    /// error occurs.
    #[instrument(skip(self, password_hash))]
    pub fn create_user(&self, username: String, password_hash: String) -> Result<User, DbError> {
        debug!(username = %username, "Creating user");
        let mut conn = self.connection()?;

        let new_user = NewUser::new(username, password_hash);

        let user = diesel::insert_into(schema::users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)?;

        info!(user_id = user.id(), username = %user.username(), "User created");
        Ok(user)
    }

    /// Gets a user by username. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_user_by_name(&self, username: &str) -> Result<Option<User>, DbError> {
        debug!(username = %username, "Looking up user by name");
        let mut conn = self.connection()?;

        let user = schema::users::table
            .filter(schema::users::username.eq(username))
            .first::<User>(&mut conn)
            .optional()?;

        if let Some(ref u) = user {
            debug!(user_id = u.id(), "User found");
        } else {
            debug!("User not found");
        }

        Ok(user)
    }

    /// Records one half-move of a game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, mv), fields(user_id = mv.user_id(), is_engine = mv.is_engine(), status = %mv.status()))]
    pub fn record_move(&self, mv: NewMove) -> Result<StoredMove, DbError> {
        debug!("Recording move");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::moves::table)
            .values(&mv)
            .returning(StoredMove::as_returning())
            .get_result(&mut conn)?;

        info!(
            move_id = stored.id(),
            user_id = stored.user_id(),
            status = %stored.status(),
            "Move recorded"
        );
        Ok(stored)
    }

    /// Gets the most recently recorded move for a user, if any.
    ///
    /// Ordered by insertion id rather than timestamp: the two half-moves of
    /// one turn often share a creation second.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn latest_move(&self, user_id: i32) -> Result<Option<StoredMove>, DbError> {
        debug!(user_id = %user_id, "Loading latest move");
        let mut conn = self.connection()?;

        let mv = schema::moves::table
            .filter(schema::moves::user_id.eq(user_id))
            .order(schema::moves::id.desc())
            .first::<StoredMove>(&mut conn)
            .optional()?;

        Ok(mv)
    }

    /// Gets all moves for a user, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_moves(&self, user_id: i32) -> Result<Vec<StoredMove>, DbError> {
        debug!(user_id = %user_id, "Loading move history");
        let mut conn = self.connection()?;

        let moves = schema::moves::table
            .filter(schema::moves::user_id.eq(user_id))
            .order(schema::moves::id.desc())
            .load::<StoredMove>(&mut conn)?;

        info!(user_id = %user_id, count = moves.len(), "Move history loaded");
        Ok(moves)
    }
}
