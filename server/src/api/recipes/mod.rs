pub mod comments;
pub mod create;
pub mod delete;
mod form;
pub mod get;
pub mod list;
pub mod mine;
pub mod search;
pub mod update;

use crate::error::ApiError;
use crate::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;
use uuid::Uuid;

/// Returns the router for /recipes endpoints (mounted at /recipes). Route
/// names follow the public API contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_recipe", post(create::add_recipe))
        .route("/get_recipes", get(list::get_recipes))
        .route("/get_recipe/{id}", get(get::get_recipe))
        .route("/get_my_recipes", get(mine::get_my_recipes))
        .route("/update_recipe/{id}", put(update::update_recipe))
        .route(
            "/delete_recipe/{id}",
            axum::routing::delete(delete::delete_recipe),
        )
        .route("/search_recipes", get(search::search_recipes))
        .route("/add_comment", post(comments::add_comment))
        .route("/get_comments/{recipe_id}", get(comments::get_comments))
}

/// Textual ids that do not parse resolve to not-found, the same as ids that
/// were never issued.
pub(crate) fn parse_recipe_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Recipe not found"))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::add_recipe,
        list::get_recipes,
        get::get_recipe,
        mine::get_my_recipes,
        update::update_recipe,
        delete::delete_recipe,
        search::search_recipes,
        comments::add_comment,
        comments::get_comments,
    ),
    components(schemas(
        create::CreateRecipeForm,
        create::CreateRecipeResponse,
        list::ListRecipesResponse,
        get::RecipeResponse,
        get::CommentResponse,
        update::UpdateRecipeForm,
        comments::AddCommentRequest,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_map_to_not_found() {
        assert!(matches!(
            parse_recipe_id("not-a-uuid"),
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(parse_recipe_id(""), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn well_formed_ids_parse() {
        let id = parse_recipe_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
