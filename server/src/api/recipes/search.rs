use crate::error::ApiError;
use crate::repo;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::get::RecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchRecipesParams {
    /// Keyword matched case-insensitively against recipe titles
    pub keyword: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/recipes/search_recipes",
    tag = "recipes",
    params(SearchRecipesParams),
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeResponse])
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchRecipesParams>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    // Empty-string filters behave as if they were absent.
    let keyword = params.keyword.as_deref().filter(|s| !s.is_empty());
    let category = params.category.as_deref().filter(|s| !s.is_empty());

    let mut conn = state.pool.get()?;

    let recipes = repo::recipes::search(&mut conn, keyword, category)?;

    Ok(Json(
        recipes.into_iter().map(RecipeResponse::from).collect(),
    ))
}
