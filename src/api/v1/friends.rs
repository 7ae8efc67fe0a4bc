use crate::api::{CurrentUser, RequestContext};
use crate::common::error::ServiceResponse;
use crate::models::friendships::{ActionResponse, CreatedRequest, FriendEntry, FriendRequestEntry};
use crate::models::users::SuggestedUser;
use crate::usecases::{friendships, suggestions};
use axum::Json;
use axum::extract::Path;

pub async fn list_friends(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<Vec<FriendEntry>> {
    let friends = friendships::fetch_friends(&ctx, user.user_id).await?;
    Ok(Json(friends))
}

pub async fn list_incoming_requests(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<Vec<FriendRequestEntry>> {
    let requests = friendships::fetch_incoming(&ctx, user.user_id).await?;
    Ok(Json(requests))
}

pub async fn list_outgoing_requests(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<Vec<FriendRequestEntry>> {
    let requests = friendships::fetch_outgoing(&ctx, user.user_id).await?;
    Ok(Json(requests))
}

pub async fn suggested_friends(
    ctx: RequestContext,
    user: CurrentUser,
) -> ServiceResponse<Vec<SuggestedUser>> {
    let suggested = suggestions::fetch_suggested(&ctx, user.user_id).await?;
    Ok(Json(suggested))
}

pub async fn send_request(
    ctx: RequestContext,
    user: CurrentUser,
    Path(target_id): Path<i64>,
) -> ServiceResponse<CreatedRequest> {
    let created = friendships::send_request(&ctx, user.user_id, target_id).await?;
    Ok(Json(created))
}

pub async fn accept_request(
    ctx: RequestContext,
    user: CurrentUser,
    Path(request_id): Path<u64>,
) -> ServiceResponse<ActionResponse> {
    friendships::accept_request(&ctx, user.user_id, request_id).await?;
    Ok(Json(ActionResponse {
        message: "Friend request accepted",
    }))
}

pub async fn cancel_request(
    ctx: RequestContext,
    user: CurrentUser,
    Path(request_id): Path<u64>,
) -> ServiceResponse<ActionResponse> {
    friendships::cancel_request(&ctx, user.user_id, request_id).await?;
    Ok(Json(ActionResponse {
        message: "Friend request deleted",
    }))
}

pub async fn remove_friend(
    ctx: RequestContext,
    user: CurrentUser,
    Path(friendship_id): Path<u64>,
) -> ServiceResponse<ActionResponse> {
    friendships::remove_friend(&ctx, user.user_id, friendship_id).await?;
    Ok(Json(ActionResponse {
        message: "Friend removed",
    }))
}
