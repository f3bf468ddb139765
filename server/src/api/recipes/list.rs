use crate::error::{ApiError, ErrorResponse};
use crate::repo;
use crate::repo::recipes::{SortDir, SortField};
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::get::RecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to skip (default: 0)
    pub skip: Option<i64>,
    /// Number of items to return (default: 10, max: 100)
    pub limit: Option<i64>,
    /// Sort field: title, category, user_id or created_at (the default)
    pub sort_by: Option<String>,
    /// Sort direction: asc or desc (the default)
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
    pub recipes: Vec<RecipeResponse>,
}

/// Bounds-checks pagination before any storage work happens.
fn validate_page(skip: i64, limit: i64) -> Result<(), ApiError> {
    if skip < 0 {
        return Err(ApiError::BadRequest("skip must be >= 0".to_string()));
    }
    if !(1..=100).contains(&limit) {
        return Err(ApiError::BadRequest(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/recipes/get_recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Paginated list of recipes", body = ListRecipesResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(10);
    validate_page(skip, limit)?;

    let sort_field = SortField::parse(params.sort_by.as_deref());
    let sort_dir = SortDir::parse(params.sort_order.as_deref());

    let mut conn = state.pool.get()?;

    let (total, page) = repo::recipes::page(&mut conn, sort_field, sort_dir, skip, limit)?;

    Ok(Json(ListRecipesResponse {
        total,
        skip,
        limit,
        recipes: page.into_iter().map(RecipeResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_pagination() {
        assert!(validate_page(0, 1).is_ok());
        assert!(validate_page(0, 10).is_ok());
        assert!(validate_page(1000, 100).is_ok());
    }

    #[test]
    fn rejects_out_of_range_pagination() {
        assert!(validate_page(-1, 10).is_err());
        assert!(validate_page(0, 0).is_err());
        assert!(validate_page(0, 101).is_err());
        assert!(validate_page(0, -5).is_err());
    }
}
