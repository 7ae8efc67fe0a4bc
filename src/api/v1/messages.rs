use crate::api::{CurrentUser, RequestContext};
use crate::common::error::ServiceResponse;
use crate::models::messages::{Conversation, MessageView, SendMessageArgs};
use crate::usecases::messages;
use axum::Json;
use axum::extract::Path;

pub async fn conversations(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<Vec<Conversation>> {
    let conversations = messages::fetch_conversations(&ctx, user.user_id).await?;
    Ok(Json(conversations))
}

pub async fn with_user(
    ctx: RequestContext,
    user: CurrentUser,
    Path(other_id): Path<i64>,
) -> ServiceResponse<Vec<MessageView>> {
    let conversation = messages::fetch_with(&ctx, user.user_id, other_id).await?;
    Ok(Json(conversation))
}

pub async fn send(
    ctx: RequestContext,
    user: CurrentUser,
    Json(args): Json<SendMessageArgs>,
) -> ServiceResponse<MessageView> {
    let sent = messages::send(&ctx, user.user_id, args).await?;
    Ok(Json(sent))
}
