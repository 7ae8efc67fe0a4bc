use crate::common::context::Context;
use crate::entities::messages::Message;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, sender_id, recipient_id, content, is_read, created_at";

pub async fn create<C: Context>(
    ctx: &C,
    sender_id: i64,
    recipient_id: i64,
    content: &str,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (sender_id, recipient_id, content, is_read, created_at)",
        " VALUES (?, ?, ?, FALSE, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(sender_id)
        .bind(recipient_id)
        .bind(content)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: u64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

/// Full conversation between two users, oldest first.
pub async fn fetch_between<C: Context>(
    ctx: &C,
    user_a: i64,
    user_b: i64,
) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE (sender_id = ? AND recipient_id = ?)",
        " OR (sender_id = ? AND recipient_id = ?)",
        " ORDER BY created_at"
    );
    sqlx::query_as(QUERY)
        .bind(user_a)
        .bind(user_b)
        .bind(user_b)
        .bind(user_a)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_latest_between<C: Context>(
    ctx: &C,
    user_a: i64,
    user_b: i64,
) -> sqlx::Result<Option<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE (sender_id = ? AND recipient_id = ?)",
        " OR (sender_id = ? AND recipient_id = ?)",
        " ORDER BY created_at DESC LIMIT 1"
    );
    sqlx::query_as(QUERY)
        .bind(user_a)
        .bind(user_b)
        .bind(user_b)
        .bind(user_a)
        .fetch_optional(ctx.db())
        .await
}

/// Distinct users the given user has exchanged messages with.
pub async fn fetch_contact_ids<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT DISTINCT IF(sender_id = ?, recipient_id, sender_id) FROM ",
        TABLE_NAME,
        " WHERE sender_id = ? OR recipient_id = ?"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn unread_count_from<C: Context>(
    ctx: &C,
    sender_id: i64,
    recipient_id: i64,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE sender_id = ? AND recipient_id = ? AND is_read IS FALSE"
    );
    sqlx::query_scalar(QUERY)
        .bind(sender_id)
        .bind(recipient_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn mark_read_from<C: Context>(
    ctx: &C,
    sender_id: i64,
    recipient_id: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_read = TRUE",
        " WHERE sender_id = ? AND recipient_id = ? AND is_read IS FALSE"
    );
    sqlx::query(QUERY)
        .bind(sender_id)
        .bind(recipient_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
