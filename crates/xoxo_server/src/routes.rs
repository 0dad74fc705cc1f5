//! HTTP routes and handlers.

use axum::Json;
use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use tracing::{debug, info, instrument};
use xoxo_game::Outcome;

use crate::auth::{AuthUser, Claims, password};
use crate::db::{NewMove, outcome_to_db};
use crate::dto::{Credentials, MoveRecord, PlayRequest, PlayResponse, TokenResponse, UserInfo};
use crate::error::ApiError;
use crate::play;
use crate::state::AppState;

/// Board side length when a request doesn't name one.
const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest board the exhaustive search can serve interactively.
const MAX_BOARD_SIZE: usize = 3;

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/play", post(play_turn))
        .route("/moves", get(list_moves))
        .route("/users/me", get(current_user))
        .with_state(state)
}

fn validate_credentials(credentials: &Credentials) -> Result<(), ApiError> {
    let Credentials { username, password } = credentials;
    if username.len() < 3 || username.len() > 50 {
        return Err(ApiError::BadRequest(
            "username must be 3-50 characters".into(),
        ));
    }
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ApiError::BadRequest(
            "username must contain only word characters".into(),
        ));
    }
    if password.len() < 3 || password.len() > 50 {
        return Err(ApiError::BadRequest(
            "password must be 3-50 characters".into(),
        ));
    }
    Ok(())
}

/// Creates a new user account.
#[instrument(skip(state, form), fields(username = %form.username))]
async fn register(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<StatusCode, ApiError> {
    validate_credentials(&form)?;

    if state.repo().get_user_by_name(&form.username)?.is_some() {
        return Err(ApiError::BadRequest(
            "user with this username already exists".into(),
        ));
    }

    let hashed = password::hash(&form.password)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))?;
    let user = state.repo().create_user(form.username, hashed)?;

    info!(user_id = user.id(), "User registered");
    Ok(StatusCode::CREATED)
}

/// Authenticates a user and issues a bearer token.
#[instrument(skip(state, form), fields(username = %form.username))]
async fn login(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .repo()
        .get_user_by_name(&form.username)?
        .ok_or_else(|| ApiError::Unauthorized("incorrect username or password".into()))?;

    if !password::verify(&form.password, user.password_hash()) {
        return Err(ApiError::Unauthorized(
            "incorrect username or password".into(),
        ));
    }

    let token = state
        .crypto()
        .encode(&Claims::new(user.username().clone()))
        .map_err(|e| ApiError::Internal(format!("token signing failed: {}", e)))?;

    info!(user_id = user.id(), "User logged in");
    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".into(),
    }))
}

/// Plays one turn: the caller's move, then the engine's reply while the
/// game remains active. Both half-moves are persisted with a snapshot of
/// the board after them.
#[instrument(skip(state, user, req), fields(user_id = user.user().id()))]
async fn play_turn(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<PlayRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let size = req.size.unwrap_or(DEFAULT_BOARD_SIZE);
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(ApiError::BadRequest(format!(
            "board size must be between 1 and {}",
            MAX_BOARD_SIZE
        )));
    }

    let user_id = *user.user().id();
    let mut board = play::resume_or_new(state.repo(), user_id, size)?;

    let mut status = board.status();
    if let Some(mv) = req.player_move() {
        status = play::apply_player_move(&mut board, mv)?;
        state.repo().record_move(NewMove::new(
            user_id,
            mv.row as i32,
            mv.col as i32,
            false,
            outcome_to_db(status).to_string(),
            serde_json::to_string(&board)?,
        ))?;
    }

    let mut engine_move = None;
    if status == Outcome::Active {
        if let Some((mv, new_status)) = play::apply_engine_reply(&mut board)? {
            status = new_status;
            engine_move = Some(mv);
            state.repo().record_move(NewMove::new(
                user_id,
                mv.row as i32,
                mv.col as i32,
                true,
                outcome_to_db(status).to_string(),
                serde_json::to_string(&board)?,
            ))?;
        }
    }

    debug!(status = outcome_to_db(status), board = %board.display(), "Turn complete");
    Ok(Json(PlayResponse::new(status, engine_move, &board)))
}

/// Returns the caller's move history, most recent first.
#[instrument(skip(state, user), fields(user_id = user.user().id()))]
async fn list_moves(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<MoveRecord>>, ApiError> {
    let moves = state.repo().list_moves(*user.user().id())?;
    Ok(Json(moves.iter().map(MoveRecord::from).collect()))
}

/// Returns the authenticated user's profile.
#[instrument(skip(user), fields(user_id = user.user().id()))]
async fn current_user(user: AuthUser) -> Json<UserInfo> {
    let user = user.user();
    Json(UserInfo {
        id: *user.id(),
        username: user.username().clone(),
    })
}
