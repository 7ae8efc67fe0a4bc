use crate::common::context::Context;
use crate::entities::notifications::Notification;

const TABLE_NAME: &str = "notifications";
const READ_FIELDS: &str = "id, user_id, type, message, is_read, created_at";

pub async fn create<C: Context>(
    ctx: &C,
    user_id: i64,
    kind: &str,
    message: &str,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, type, message, is_read, created_at)",
        " VALUES (?, ?, ?, FALSE, NOW())"
    );
    sqlx::query(QUERY)
        .bind(user_id)
        .bind(kind)
        .bind(message)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn fetch_for_user<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<Notification>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_id = ? ORDER BY created_at DESC"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_all(ctx.db()).await
}

pub async fn unread_count<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND is_read IS FALSE"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

/// Marks one notification as read, only if it belongs to the given user.
pub async fn mark_read<C: Context>(
    ctx: &C,
    notification_id: u64,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_read = TRUE WHERE id = ? AND user_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(notification_id)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn mark_all_read<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_read = TRUE WHERE user_id = ? AND is_read IS FALSE"
    );
    sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(())
}
