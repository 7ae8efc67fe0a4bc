use crate::common::context::Context;
use crate::entities::friendships::{Friendship, FriendshipEntry};

const TABLE_NAME: &str = "friendships";
const READ_FIELDS: &str = "id, requester_id, addressee_id, accepted, created_at";

/// Joined fields for listing edges together with the counterpart's profile.
const ENTRY_FIELDS: &str = r#"
f.id, f.created_at,
u.id as user_id, u.first_name, u.last_name, u.username, u.profile_photo_url"#;

/// The canonical (lo, hi) ordering of an unordered user pair. The table
/// carries a unique key over these two columns, which is what guarantees
/// at most one edge per pair regardless of request direction.
pub fn canonical_pair(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Inserts a pending edge. The insert and the uniqueness check are a single
/// statement; a concurrent duplicate surfaces as a unique-key violation.
pub async fn create<C: Context>(
    ctx: &C,
    requester_id: i64,
    addressee_id: i64,
) -> sqlx::Result<Friendship> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (requester_id, addressee_id, user_lo, user_hi, accepted, created_at)",
        " VALUES (?, ?, ?, ?, FALSE, NOW())"
    );
    let (user_lo, user_hi) = canonical_pair(requester_id, addressee_id);
    let result = sqlx::query(QUERY)
        .bind(requester_id)
        .bind(addressee_id)
        .bind(user_lo)
        .bind(user_hi)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, friendship_id: u64) -> sqlx::Result<Friendship> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(friendship_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_by_pair<C: Context>(
    ctx: &C,
    user_a: i64,
    user_b: i64,
) -> sqlx::Result<Option<Friendship>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_lo = ? AND user_hi = ?"
    );
    let (user_lo, user_hi) = canonical_pair(user_a, user_b);
    sqlx::query_as(QUERY)
        .bind(user_lo)
        .bind(user_hi)
        .fetch_optional(ctx.db())
        .await
}

pub async fn exists_accepted<C: Context>(ctx: &C, user_a: i64, user_b: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT EXISTS(SELECT 1 FROM ",
        TABLE_NAME,
        " WHERE user_lo = ? AND user_hi = ? AND accepted IS TRUE)"
    );
    let (user_lo, user_hi) = canonical_pair(user_a, user_b);
    let exists: i64 = sqlx::query_scalar(QUERY)
        .bind(user_lo)
        .bind(user_hi)
        .fetch_one(ctx.db())
        .await?;
    Ok(exists != 0)
}

/// Accepted edges for a user, each joined with the other party's profile.
pub async fn fetch_accepted<C: Context>(
    ctx: &C,
    user_id: i64,
) -> sqlx::Result<Vec<FriendshipEntry>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        ENTRY_FIELDS,
        " FROM ",
        TABLE_NAME,
        " f INNER JOIN users u",
        " ON u.id = IF(f.requester_id = ?, f.addressee_id, f.requester_id)",
        " WHERE (f.requester_id = ? OR f.addressee_id = ?) AND f.accepted IS TRUE",
        " ORDER BY f.id"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// Pending requests received by a user, joined with the requester's profile.
pub async fn fetch_incoming<C: Context>(
    ctx: &C,
    user_id: i64,
) -> sqlx::Result<Vec<FriendshipEntry>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        ENTRY_FIELDS,
        " FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.requester_id",
        " WHERE f.addressee_id = ? AND f.accepted IS FALSE",
        " ORDER BY f.id"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_all(ctx.db()).await
}

/// Pending requests sent by a user, joined with the addressee's profile.
pub async fn fetch_outgoing<C: Context>(
    ctx: &C,
    user_id: i64,
) -> sqlx::Result<Vec<FriendshipEntry>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        ENTRY_FIELDS,
        " FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.addressee_id",
        " WHERE f.requester_id = ? AND f.accepted IS FALSE",
        " ORDER BY f.id"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_all(ctx.db()).await
}

/// Every edge a user is a party to, in any state and either direction.
pub async fn fetch_involving<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<Friendship>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE requester_id = ? OR addressee_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// Marks a pending request as accepted. The shape conditions are part of the
/// statement so two racing accepts cannot both observe success; returns the
/// number of rows that actually transitioned.
pub async fn accept<C: Context>(
    ctx: &C,
    request_id: u64,
    addressee_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET accepted = TRUE",
        " WHERE id = ? AND addressee_id = ? AND accepted IS FALSE"
    );
    let result = sqlx::query(QUERY)
        .bind(request_id)
        .bind(addressee_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// Deletes a pending request where the given user is either party.
pub async fn delete_pending<C: Context>(
    ctx: &C,
    request_id: u64,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE id = ? AND accepted IS FALSE",
        " AND (requester_id = ? OR addressee_id = ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(request_id)
        .bind(user_id)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// Deletes an accepted friendship where the given user is either party.
pub async fn delete_accepted<C: Context>(
    ctx: &C,
    friendship_id: u64,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE id = ? AND accepted IS TRUE",
        " AND (requester_id = ? OR addressee_id = ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(friendship_id)
        .bind(user_id)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::canonical_pair;

    #[test]
    fn canonical_pair_ignores_direction() {
        assert_eq!(canonical_pair(1, 2), (1, 2));
        assert_eq!(canonical_pair(2, 1), (1, 2));
    }

    #[test]
    fn canonical_pair_orders_lo_before_hi() {
        let (lo, hi) = canonical_pair(42, 7);
        assert!(lo < hi);
    }
}
