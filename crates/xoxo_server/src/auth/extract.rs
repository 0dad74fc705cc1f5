//! Request extractor for authenticated routes.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use tracing::debug;

use crate::db::User;
use crate::error::ApiError;
use crate::state::AppState;

/// The user named by the request's bearer token.
///
/// Rejects with 401 when the header is missing or malformed, the token
/// fails verification or has expired, or the named user no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser(User);

impl AuthUser {
    /// The authenticated user record.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".into()))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("invalid authorization format".into()))?;
        let claims = state
            .crypto()
            .decode(token)
            .map_err(|_| ApiError::Unauthorized("invalid or expired token".into()))?;
        let user = state
            .repo()
            .get_user_by_name(claims.username())?
            .ok_or_else(|| ApiError::Unauthorized("unknown user".into()))?;

        debug!(user_id = user.id(), username = %user.username(), "Request authenticated");
        Ok(AuthUser(user))
    }
}
