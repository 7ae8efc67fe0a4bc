use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messages::{Conversation, MessageView, SendMessageArgs};
use crate::models::notifications::NotificationKind;
use crate::models::users::UserProfile;
use crate::repositories::messages;
use crate::usecases::{friendships, notifications, users};

const MAX_MESSAGE_LENGTH: usize = 2000;
const NEW_MESSAGE_NOTIFICATION: &str = "You have a new message";

/// Sends a direct message. Messaging is gated on the friendship edge: only
/// connected users may exchange messages.
pub async fn send<C: Context>(
    ctx: &C,
    caller_id: i64,
    args: SendMessageArgs,
) -> ServiceResult<MessageView> {
    if args.content.is_empty() || args.content.len() > MAX_MESSAGE_LENGTH {
        return Err(AppError::MessagesInvalidLength);
    }
    let recipient = users::fetch_one(ctx, args.recipient_id).await?;
    if !friendships::are_connected(ctx, caller_id, recipient.id).await? {
        return Err(AppError::MessagesOnlyFriends);
    }

    let message = match messages::create(ctx, caller_id, recipient.id, &args.content).await {
        Ok(message) => message,
        Err(e) => return unexpected(e),
    };

    notifications::emit(
        ctx,
        recipient.id,
        NotificationKind::Message,
        NEW_MESSAGE_NOTIFICATION,
    )
    .await;

    Ok(MessageView::from_entity(message, caller_id))
}

/// The conversation with another user, oldest first. Reading it marks the
/// counterpart's messages to the caller as read.
pub async fn fetch_with<C: Context>(
    ctx: &C,
    caller_id: i64,
    other_id: i64,
) -> ServiceResult<Vec<MessageView>> {
    if !friendships::are_connected(ctx, caller_id, other_id).await? {
        return Err(AppError::MessagesOnlyFriends);
    }

    let entries = match messages::fetch_between(ctx, caller_id, other_id).await {
        Ok(entries) => entries,
        Err(e) => return unexpected(e),
    };
    let views = entries
        .into_iter()
        .map(|entity| MessageView::from_entity(entity, caller_id))
        .collect();

    if let Err(e) = messages::mark_read_from(ctx, other_id, caller_id).await {
        return unexpected(e);
    }
    Ok(views)
}

/// Everyone the caller has exchanged messages with, plus friends who have no
/// conversation yet; each with the latest message and the unread count.
pub async fn fetch_conversations<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<Conversation>> {
    let friend_ids = friendships::fetch_visible_user_ids(ctx, caller_id).await?;
    let friend_ids: Vec<i64> = friend_ids
        .into_iter()
        .filter(|id| *id != caller_id)
        .collect();

    let mut contact_ids = match messages::fetch_contact_ids(ctx, caller_id).await {
        Ok(ids) => ids,
        Err(e) => return unexpected(e),
    };
    for friend_id in &friend_ids {
        if !contact_ids.contains(friend_id) {
            contact_ids.push(*friend_id);
        }
    }

    let mut conversations = Vec::with_capacity(contact_ids.len());
    for contact_id in contact_ids {
        // Contacts may have deleted their account since messaging.
        let contact = match users::fetch_one(ctx, contact_id).await {
            Ok(user) => user,
            Err(AppError::UsersNotFound) => continue,
            Err(e) => return Err(e),
        };

        let last_message = match messages::fetch_latest_between(ctx, caller_id, contact_id).await {
            Ok(latest) => latest.map(|entity| MessageView::from_entity(entity, caller_id)),
            Err(e) => return unexpected(e),
        };
        let unread_count = match messages::unread_count_from(ctx, contact_id, caller_id).await {
            Ok(count) => count,
            Err(e) => return unexpected(e),
        };

        conversations.push(Conversation {
            user: UserProfile::from(contact),
            last_message,
            unread_count,
            is_friend: friend_ids.contains(&contact_id),
        });
    }
    Ok(conversations)
}
