use crate::api::MessageResponse;
use crate::auth::AuthUser;
use crate::error::{ApiError, ErrorResponse};
use crate::models::RecipeChanges;
use crate::repo;
use crate::AppState;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use utoipa::ToSchema;

use super::form::RecipeForm;
use super::parse_recipe_id;

/// Multipart form fields for updating a recipe; every field is optional and
/// absent fields are left unchanged.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UpdateRecipeForm {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub category: Option<String>,
    /// Replacement image file
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[utoipa::path(
    put,
    path = "/recipes/update_recipe/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body(content_type = "multipart/form-data", content = UpdateRecipeForm),
    responses(
        (status = 200, description = "Recipe updated successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the recipe owner", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Image save failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_recipe_id(&id)?;
    let form = RecipeForm::read(multipart).await?;

    let mut conn = state.pool.get()?;

    repo::recipes::authorize_mutation(&mut conn, id, user.id)?;

    // A new image replaces the reference outright; the old file stays on
    // disk.
    let image_url = match &form.image {
        Some(image) => Some(state.media.save(&image.filename, &image.data).await?),
        None => None,
    };

    let changes = RecipeChanges {
        title: non_blank(form.title.as_deref()),
        ingredients: non_blank(form.ingredients.as_deref()),
        steps: non_blank(form.steps.as_deref()),
        category: non_blank(form.category.as_deref()),
        image_url: image_url.as_deref(),
    };

    if !changes.is_empty() {
        repo::recipes::update(&mut conn, id, &changes)?;
    }

    Ok(Json(MessageResponse::new("Recipe updated successfully")))
}

/// Blank form values mean "leave unchanged", the same as absent fields.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_absent() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("lentil")), Some("lentil"));
    }
}
