use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Failure taxonomy for the whole API. Dependency code raises these
/// explicitly; the axum boundary converts each into a status code plus a
/// `{"detail": ...}` body. Nothing is swallowed or retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    Internal(&'static str),

    #[error("Image save failed: {0}")]
    MediaStore(#[from] std::io::Error),

    #[error("Database error")]
    Database(#[from] diesel::result::Error),

    #[error("Database connection failed")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::MediaStore(_) | ApiError::Database(_) | ApiError::Pool(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Server-side failures carry details the client should not see;
        // log them here and return the generic Display message.
        if status.is_server_error() {
            match &self {
                ApiError::Database(e) => tracing::error!(error = %e, "database failure"),
                ApiError::Pool(e) => tracing::error!(error = %e, "connection pool failure"),
                ApiError::MediaStore(e) => tracing::error!(error = %e, "media store failure"),
                other => tracing::error!(error = %other, "request failed"),
            }
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no token").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden("not yours").status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("missing").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("dup").status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal("oops").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database(diesel::result::Error::RollbackTransaction).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_errors_do_not_leak_details() {
        let err = ApiError::Database(diesel::result::Error::RollbackTransaction);
        assert_eq!(err.to_string(), "Database error");
    }
}
