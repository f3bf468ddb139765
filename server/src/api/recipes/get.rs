use crate::error::{ApiError, ErrorResponse};
use crate::models::{Comment, Recipe};
use crate::repo;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::parse_recipe_id;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub category: String,
    pub image_url: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Present only when comments were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentResponse>>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            category: recipe.category,
            image_url: recipe.image_url,
            user_id: recipe.user_id,
            created_at: recipe.created_at,
            comments: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            comment_text: comment.comment_text,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipeParams {
    /// Include the recipe's comments, newest first
    #[serde(default)]
    pub include_comments: bool,
}

#[utoipa::path(
    get,
    path = "/recipes/get_recipe/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID"),
        GetRecipeParams
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<GetRecipeParams>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = parse_recipe_id(&id)?;

    let mut conn = state.pool.get()?;

    let recipe =
        repo::recipes::find(&mut conn, id)?.ok_or(ApiError::NotFound("Recipe not found"))?;

    let mut response = RecipeResponse::from(recipe);
    if params.include_comments {
        let comments = repo::comments::for_recipe(&mut conn, id)?;
        response.comments = Some(comments.into_iter().map(CommentResponse::from).collect());
    }

    Ok(Json(response))
}
