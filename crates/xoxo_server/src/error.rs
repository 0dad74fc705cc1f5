//! HTTP-facing error type.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;
use xoxo_game::BoardError;

use crate::db::DbError;

/// Errors surfaced to API clients.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ApiError {
    /// Malformed or unacceptable request input.
    #[display("{_0}")]
    BadRequest(String),

    /// Missing or invalid credentials.
    #[display("{_0}")]
    Unauthorized(String),

    /// The request conflicts with the current game state.
    #[display("{_0}")]
    Conflict(String),

    /// Unexpected server-side failure; detail is logged, not leaked.
    #[display("internal server error")]
    Internal(String),
}

impl std::error::Error for ApiError {}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            // A caller-logic error, never swallowed: the proposed move
            // targets a cell filled earlier in the game.
            BoardError::OccupiedCell(_) => ApiError::Conflict(err.to_string()),
            BoardError::OutOfBounds(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("serialization failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Unauthorized(message) => {
                let mut response = (StatusCode::UNAUTHORIZED, message).into_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer"),
                );
                response
            }
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
