use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::notifications::{Notification, NotificationKind};
use crate::repositories::notifications;
use tracing::warn;

/// Appends a notification for a user. Best-effort: the relationship or
/// message mutation this is attached to has already committed, so a storage
/// failure here is logged and swallowed rather than surfaced to the caller.
pub async fn emit<C: Context>(ctx: &C, user_id: i64, kind: NotificationKind, message: &str) {
    if let Err(e) = notifications::create(ctx, user_id, kind.as_str(), message).await {
        warn!(
            user_id,
            kind = kind.as_str(),
            "Failed to emit notification: {e}"
        );
    }
}

pub async fn fetch_for_user<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<Notification>> {
    match notifications::fetch_for_user(ctx, user_id).await {
        Ok(entries) => Ok(entries.into_iter().map(Notification::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn unread_count<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<i64> {
    match notifications::unread_count(ctx, user_id).await {
        Ok(count) => Ok(count),
        Err(e) => unexpected(e),
    }
}

/// Marks one of the caller's notifications as read. A notification that does
/// not exist or belongs to somebody else reads as not-found either way.
pub async fn mark_read<C: Context>(
    ctx: &C,
    caller_id: i64,
    notification_id: u64,
) -> ServiceResult<()> {
    match notifications::mark_read(ctx, notification_id, caller_id).await {
        Ok(0) => Err(AppError::NotificationsNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

pub async fn mark_all_read<C: Context>(ctx: &C, caller_id: i64) -> ServiceResult<()> {
    match notifications::mark_all_read(ctx, caller_id).await {
        Ok(()) => Ok(()),
        Err(e) => unexpected(e),
    }
}
