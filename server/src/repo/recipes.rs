use crate::error::ApiError;
use crate::models::{NewRecipe, Recipe, RecipeChanges};
use crate::schema::recipes;
use diesel::prelude::*;
use uuid::Uuid;

/// Sort fields accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Category,
    UserId,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Parses a client-supplied sort field. Values outside the allow-list
    /// silently fall back to `CreatedAt`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("title") => SortField::Title,
            Some("category") => SortField::Category,
            Some("user_id") => SortField::UserId,
            _ => SortField::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    /// `asc` sorts ascending; every other value means descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }
}

pub fn insert(conn: &mut PgConnection, new_recipe: &NewRecipe<'_>) -> QueryResult<Recipe> {
    diesel::insert_into(recipes::table)
        .values(new_recipe)
        .returning(Recipe::as_returning())
        .get_result(conn)
}

pub fn find(conn: &mut PgConnection, id: Uuid) -> QueryResult<Option<Recipe>> {
    recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

/// One page of the collection plus the pre-pagination total. The total is a
/// separate COUNT so an out-of-range `skip` still reports the true size.
pub fn page(
    conn: &mut PgConnection,
    sort_field: SortField,
    sort_dir: SortDir,
    skip: i64,
    limit: i64,
) -> QueryResult<(i64, Vec<Recipe>)> {
    let total: i64 = recipes::table.count().get_result(conn)?;

    let query = recipes::table.select(Recipe::as_select()).into_boxed();
    let query = match (sort_field, sort_dir) {
        (SortField::Title, SortDir::Asc) => query.order(recipes::title.asc()),
        (SortField::Title, SortDir::Desc) => query.order(recipes::title.desc()),
        (SortField::Category, SortDir::Asc) => query.order(recipes::category.asc()),
        (SortField::Category, SortDir::Desc) => query.order(recipes::category.desc()),
        (SortField::UserId, SortDir::Asc) => query.order(recipes::user_id.asc()),
        (SortField::UserId, SortDir::Desc) => query.order(recipes::user_id.desc()),
        (SortField::CreatedAt, SortDir::Asc) => query.order(recipes::created_at.asc()),
        (SortField::CreatedAt, SortDir::Desc) => query.order(recipes::created_at.desc()),
    };

    let page = query.offset(skip).limit(limit).load(conn)?;

    Ok((total, page))
}

pub fn owned_by(conn: &mut PgConnection, user_id: Uuid) -> QueryResult<Vec<Recipe>> {
    recipes::table
        .filter(recipes::user_id.eq(user_id))
        .order(recipes::created_at.desc())
        .select(Recipe::as_select())
        .load(conn)
}

/// Merges the provided fields into the recipe row; absent fields are left
/// untouched. Returns the number of rows updated.
pub fn update(
    conn: &mut PgConnection,
    id: Uuid,
    changes: &RecipeChanges<'_>,
) -> QueryResult<usize> {
    diesel::update(recipes::table.find(id))
        .set(changes)
        .execute(conn)
}

pub fn delete(conn: &mut PgConnection, id: Uuid) -> QueryResult<usize> {
    diesel::delete(recipes::table.find(id)).execute(conn)
}

/// Case-insensitive substring match on title, exact match on category,
/// AND-combined. With no filters the whole collection comes back.
pub fn search(
    conn: &mut PgConnection,
    keyword: Option<&str>,
    category: Option<&str>,
) -> QueryResult<Vec<Recipe>> {
    let mut query = recipes::table.select(Recipe::as_select()).into_boxed();

    if let Some(keyword) = keyword {
        query = query.filter(recipes::title.ilike(format!("%{}%", escape_like(keyword))));
    }
    if let Some(category) = category {
        query = query.filter(recipes::category.eq(category));
    }

    query.order(recipes::created_at.desc()).load(conn)
}

/// Ownership gate for mutations. Lookup happens first, so a missing recipe
/// reports not-found rather than forbidden; then the requester must be the
/// creator.
pub fn authorize_mutation(
    conn: &mut PgConnection,
    id: Uuid,
    requester_id: Uuid,
) -> Result<Recipe, ApiError> {
    let recipe = find(conn, id)?.ok_or(ApiError::NotFound("Recipe not found"))?;

    if recipe.user_id != requester_id {
        return Err(ApiError::Forbidden("Not authorized to modify this recipe"));
    }

    Ok(recipe)
}

/// Escapes LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_allow_list() {
        assert_eq!(SortField::parse(Some("title")), SortField::Title);
        assert_eq!(SortField::parse(Some("category")), SortField::Category);
        assert_eq!(SortField::parse(Some("user_id")), SortField::UserId);
        assert_eq!(SortField::parse(Some("created_at")), SortField::CreatedAt);
    }

    #[test]
    fn unknown_sort_fields_fall_back_to_created_at() {
        assert_eq!(SortField::parse(Some("steps")), SortField::CreatedAt);
        assert_eq!(SortField::parse(Some("id; DROP TABLE")), SortField::CreatedAt);
        assert_eq!(SortField::parse(Some("")), SortField::CreatedAt);
        assert_eq!(SortField::parse(None), SortField::CreatedAt);
    }

    #[test]
    fn sort_direction_defaults_to_desc() {
        assert_eq!(SortDir::parse(Some("asc")), SortDir::Asc);
        assert_eq!(SortDir::parse(Some("desc")), SortDir::Desc);
        assert_eq!(SortDir::parse(Some("descending")), SortDir::Desc);
        assert_eq!(SortDir::parse(None), SortDir::Desc);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
