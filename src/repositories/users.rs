use crate::common::context::Context;
use crate::entities::users::User;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = r#"
id, first_name, last_name, username, email,
location, skills, profile_photo_url, created_at"#;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

/// All users in insertion order. Candidate pool for friend suggestions.
pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY id"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
