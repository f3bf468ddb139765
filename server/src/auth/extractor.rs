use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::User;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use super::db::get_user_from_token;

/// Extractor that validates the `Authorization: Bearer` header and provides
/// the authenticated user.
///
/// Use this in any handler that requires authentication:
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> impl IntoResponse {
///     // user.id is the verified caller identity
/// }
/// ```
///
/// Rejection happens before the handler body runs, so no business logic
/// executes for an unauthenticated request.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    DbPool: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(ApiError::Unauthorized("Missing Authorization header"))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid Authorization header"))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("Invalid Authorization header format"))?;

        let user = get_user_from_token(&pool, token)?;

        Ok(AuthUser(user))
    }
}
