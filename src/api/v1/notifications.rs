use crate::api::{CurrentUser, RequestContext};
use crate::common::error::ServiceResponse;
use crate::models::notifications::{Notification, UnreadCountResponse};
use crate::usecases::notifications;
use axum::Json;
use axum::extract::Path;

pub async fn list(ctx: RequestContext, user: CurrentUser) -> ServiceResponse<Vec<Notification>> {
    let entries = notifications::fetch_for_user(&ctx, user.user_id).await?;
    Ok(Json(entries))
}

pub async fn unread_count(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<UnreadCountResponse> {
    let count = notifications::unread_count(&ctx, user.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}

pub async fn mark_read(
    ctx: RequestContext,
    user: CurrentUser,
    Path(notification_id): Path<u64>,
) -> ServiceResponse<()> {
    notifications::mark_read(&ctx, user.user_id, notification_id).await?;
    Ok(Json(()))
}

pub async fn mark_all_read(ctx: RequestContext, user: CurrentUser) -> ServiceResponse<()> {
    notifications::mark_all_read(&ctx, user.user_id).await?;
    Ok(Json(()))
}
