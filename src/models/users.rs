use crate::entities::users::User as UserEntity;
use serde::Serialize;

/// The public profile projection embedded in friend/request/conversation
/// listings. Absent optional fields project as empty strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub profile_photo_url: String,
}

impl From<UserEntity> for UserProfile {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            username: value.username,
            profile_photo_url: value.profile_photo_url.unwrap_or_default(),
        }
    }
}

/// A ranked friend suggestion; the profile plus the skills text the
/// ranking was computed over.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub profile_photo_url: String,
    pub skills: String,
}

impl From<UserEntity> for SuggestedUser {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            username: value.username,
            profile_photo_url: value.profile_photo_url.unwrap_or_default(),
            skills: value.skills.unwrap_or_default(),
        }
    }
}
