use crate::api::MessageResponse;
use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::repo;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;

use super::parse_recipe_id;

#[utoipa::path(
    delete,
    path = "/recipes/delete_recipe/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the recipe owner", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_recipe_id(&id)?;

    let mut conn = state.pool.get()?;

    repo::recipes::authorize_mutation(&mut conn, id, user.id)?;

    // Comments are left in place; there is no cascade.
    repo::recipes::delete(&mut conn, id)?;

    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}
