use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::NewRecipe;
use crate::repo;
use crate::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::form::RecipeForm;

/// Multipart form fields for creating a recipe.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreateRecipeForm {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub category: String,
    /// Optional image file
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/recipes/add_recipe",
    tag = "recipes",
    request_body(content_type = "multipart/form-data", content = CreateRecipeForm),
    responses(
        (status = 201, description = "Recipe created successfully", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Image save failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreateRecipeResponse>), ApiError> {
    let form = RecipeForm::read(multipart).await?;

    let title = form.require("title")?;
    let ingredients = form.require("ingredients")?;
    let steps = form.require("steps")?;
    let category = form.require("category")?;

    let image_url = match &form.image {
        Some(image) => Some(state.media.save(&image.filename, &image.data).await?),
        None => None,
    };

    let mut conn = state.pool.get()?;

    // The owner comes from the verified credential, never from the form.
    let new_recipe = NewRecipe {
        user_id: user.id,
        title,
        ingredients,
        steps,
        category,
        image_url: image_url.as_deref(),
    };

    let recipe = repo::recipes::insert(&mut conn, &new_recipe)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRecipeResponse { id: recipe.id }),
    ))
}
