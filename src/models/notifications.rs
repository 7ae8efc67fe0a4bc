use crate::entities::notifications::Notification as NotificationEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The notification tags written by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    FriendRequest,
    FriendAccepted,
    Message,
}

impl NotificationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::FriendRequest => "friend_request",
            NotificationKind::FriendAccepted => "friend_accepted",
            NotificationKind::Message => "message",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationEntity> for Notification {
    fn from(value: NotificationEntity) -> Self {
        Self {
            id: value.id,
            kind: value.kind,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::NotificationKind;

    #[test]
    fn kind_tags_match_stored_values() {
        assert_eq!(NotificationKind::FriendRequest.as_str(), "friend_request");
        assert_eq!(NotificationKind::FriendAccepted.as_str(), "friend_accepted");
        assert_eq!(NotificationKind::Message.as_str(), "message");
    }
}
