use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A login session as written to redis by the authentication layer.
/// This service only ever reads sessions to resolve the caller identity.
#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
