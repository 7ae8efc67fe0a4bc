use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: String,
    pub email: String,
    pub location: Option<String>,
    /// Comma-separated skill list, as authored by the user.
    pub skills: Option<String>,
    pub profile_photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
