use crate::entities::friendships::FriendshipEntry as FriendshipEntryEntity;
use crate::models::users::UserProfile;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An established friendship as listed for the caller: the edge id and the
/// other party's profile.
#[derive(Debug, Serialize)]
pub struct FriendEntry {
    pub id: u64,
    pub user: UserProfile,
}

impl From<FriendshipEntryEntity> for FriendEntry {
    fn from(value: FriendshipEntryEntity) -> Self {
        Self {
            id: value.id,
            user: UserProfile {
                id: value.user_id,
                first_name: value.first_name.unwrap_or_default(),
                last_name: value.last_name.unwrap_or_default(),
                username: value.username,
                profile_photo_url: value.profile_photo_url.unwrap_or_default(),
            },
        }
    }
}

/// A pending request as listed for either party: edge id, when it was
/// created, and the counterpart's profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestEntry {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub user: UserProfile,
}

impl From<FriendshipEntryEntity> for FriendRequestEntry {
    fn from(value: FriendshipEntryEntity) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            user: UserProfile {
                id: value.user_id,
                first_name: value.first_name.unwrap_or_default(),
                last_name: value.last_name.unwrap_or_default(),
                username: value.username,
                profile_photo_url: value.profile_photo_url.unwrap_or_default(),
            },
        }
    }
}

/// Response for a freshly sent friend request: the created edge plus the
/// target's profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRequest {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub message: &'static str,
}
