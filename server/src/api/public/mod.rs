pub mod auth;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /auth endpoints (no bearer credential required).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup::signup))
        .route("/login", post(auth::login::login))
}

#[derive(OpenApi)]
#[openapi(
    paths(auth::signup::signup, auth::login::login),
    components(schemas(
        auth::signup::SignupRequest,
        auth::signup::SignupResponse,
        auth::login::LoginRequest,
        auth::login::LoginResponse,
    ))
)]
pub struct ApiDoc;
