use crate::entities::messages::Message as MessageEntity;
use crate::models::users::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message as seen by one side of a conversation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: u64,
    pub content: String,
    pub is_sender: bool,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl MessageView {
    pub fn from_entity(entity: MessageEntity, viewer_id: i64) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            is_sender: entity.sender_id == viewer_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub user: UserProfile,
    pub last_message: Option<MessageView>,
    pub unread_count: i64,
    pub is_friend: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageArgs {
    pub recipient_id: i64,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entity(sender_id: i64, recipient_id: i64) -> MessageEntity {
        MessageEntity {
            id: 1,
            sender_id,
            recipient_id,
            content: "hey".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn is_sender_is_relative_to_the_viewer() {
        assert!(MessageView::from_entity(entity(1, 2), 1).is_sender);
        assert!(!MessageView::from_entity(entity(1, 2), 2).is_sender);
    }
}
