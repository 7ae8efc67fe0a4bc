use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A friendship edge. Directional in creation (requester/addressee),
/// symmetric in meaning once accepted. The table additionally stores
/// `user_lo`/`user_hi` (the pair in canonical order) under a unique key,
/// so at most one edge can exist per unordered pair.
#[derive(Debug, FromRow)]
pub struct Friendship {
    pub id: u64,
    pub requester_id: i64,
    pub addressee_id: i64,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

/// An edge joined with the counterpart's profile fields, as read by the
/// friends/requests listing queries.
#[derive(Debug, FromRow)]
pub struct FriendshipEntry {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: String,
    pub profile_photo_url: Option<String>,
}
