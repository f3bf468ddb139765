use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::repo;
use crate::AppState;
use axum::extract::State;
use axum::Json;

use super::get::RecipeResponse;

#[utoipa::path(
    get,
    path = "/recipes/get_my_recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Recipes owned by the caller", body = [RecipeResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_my_recipes(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let mut conn = state.pool.get()?;

    let recipes = repo::recipes::owned_by(&mut conn, user.id)?;

    Ok(Json(
        recipes.into_iter().map(RecipeResponse::from).collect(),
    ))
}
