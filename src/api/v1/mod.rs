pub mod friends;
pub mod messages;
pub mod notifications;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post, put};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/friends", get(friends::list_friends))
        .route("/friends/requests", get(friends::list_incoming_requests))
        .route("/friends/sent", get(friends::list_outgoing_requests))
        .route("/friends/suggested", get(friends::suggested_friends))
        .route(
            "/friends/request/{id}",
            post(friends::send_request).delete(friends::cancel_request),
        )
        .route("/friends/accept/{request_id}", post(friends::accept_request))
        .route("/friends/{friendship_id}", delete(friends::remove_friend))
        .route("/messages", get(messages::conversations).post(messages::send))
        .route("/messages/{user_id}", get(messages::with_user))
        .route("/notifications", get(notifications::list))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route("/notifications/{id}/read", put(notifications::mark_read))
        .route("/notifications/read-all", put(notifications::mark_all_read))
}
