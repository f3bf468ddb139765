use crate::api::MessageResponse;
use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::NewComment;
use crate::repo;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use super::get::CommentResponse;
use super::parse_recipe_id;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub recipe_id: String,
    pub comment_text: String,
}

#[utoipa::path(
    post,
    path = "/recipes/add_comment",
    tag = "recipes",
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added successfully", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_comment(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(req): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if req.comment_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Comment text is required".to_string()));
    }

    let recipe_id = parse_recipe_id(&req.recipe_id)?;

    let mut conn = state.pool.get()?;

    // The target recipe must exist when the comment is written; nothing is
    // inserted otherwise.
    if repo::recipes::find(&mut conn, recipe_id)?.is_none() {
        return Err(ApiError::NotFound("Recipe not found"));
    }

    let new_comment = NewComment {
        recipe_id,
        user_id: user.id,
        comment_text: &req.comment_text,
    };

    repo::comments::insert(&mut conn, &new_comment)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment added successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/recipes/get_comments/{recipe_id}",
    tag = "recipes",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Comments for the recipe, newest first", body = [CommentResponse]),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let recipe_id = parse_recipe_id(&recipe_id)?;

    let mut conn = state.pool.get()?;

    let comments = repo::comments::for_recipe(&mut conn, recipe_id)?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
