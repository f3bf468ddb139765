use crate::models::{Comment, NewComment};
use crate::schema::comments;
use diesel::prelude::*;
use uuid::Uuid;

pub fn insert(conn: &mut PgConnection, new_comment: &NewComment<'_>) -> QueryResult<Comment> {
    diesel::insert_into(comments::table)
        .values(new_comment)
        .returning(Comment::as_returning())
        .get_result(conn)
}

/// All comments on a recipe, newest first. Unknown recipe ids simply yield
/// an empty list.
pub fn for_recipe(conn: &mut PgConnection, recipe_id: Uuid) -> QueryResult<Vec<Comment>> {
    comments::table
        .filter(comments::recipe_id.eq(recipe_id))
        .order(comments::created_at.desc())
        .select(Comment::as_select())
        .load(conn)
}
