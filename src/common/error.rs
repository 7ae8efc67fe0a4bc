use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,

    UsersNotFound,

    FriendshipsSelfRequest,
    FriendshipsAlreadyFriends,
    FriendshipsAlreadyRequested,
    FriendshipsRequestPending,
    FriendshipsRequestNotFound,
    FriendshipsNotFound,

    MessagesOnlyFriends,
    MessagesInvalidLength,

    NotificationsNotFound,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::UsersNotFound => "users.not_found",

            AppError::FriendshipsSelfRequest => "friendships.self_request",
            AppError::FriendshipsAlreadyFriends => "friendships.already_friends",
            AppError::FriendshipsAlreadyRequested => "friendships.already_requested",
            AppError::FriendshipsRequestPending => "friendships.request_pending",
            AppError::FriendshipsRequestNotFound => "friendships.request_not_found",
            AppError::FriendshipsNotFound => "friendships.not_found",

            AppError::MessagesOnlyFriends => "messages.only_friends",
            AppError::MessagesInvalidLength => "messages.invalid_length",

            AppError::NotificationsNotFound => "notifications.not_found",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::UsersNotFound => "This user does not exist.",

            AppError::FriendshipsSelfRequest => {
                "You cannot send a friend request to yourself."
            }
            AppError::FriendshipsAlreadyFriends => "You are already friends with this user.",
            AppError::FriendshipsAlreadyRequested => {
                "You have already sent a friend request to this user."
            }
            AppError::FriendshipsRequestPending => {
                "This user has already sent you a friend request."
            }
            AppError::FriendshipsRequestNotFound => "Friend request not found.",
            AppError::FriendshipsNotFound => "Friendship not found.",

            AppError::MessagesOnlyFriends => "You can only message with friends.",
            AppError::MessagesInvalidLength => {
                "Your message was too short/long. It has not been sent."
            }

            AppError::NotificationsNotFound => "Notification not found.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::FriendshipsSelfRequest
            | AppError::MessagesOnlyFriends
            | AppError::MessagesInvalidLength => StatusCode::BAD_REQUEST,

            AppError::Unauthorized => StatusCode::UNAUTHORIZED,

            AppError::FriendshipsAlreadyFriends
            | AppError::FriendshipsAlreadyRequested
            | AppError::FriendshipsRequestPending => StatusCode::CONFLICT,

            AppError::UsersNotFound
            | AppError::FriendshipsRequestNotFound
            | AppError::FriendshipsNotFound
            | AppError::NotificationsNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_variants_map_to_conflict_status() {
        for e in [
            AppError::FriendshipsAlreadyFriends,
            AppError::FriendshipsAlreadyRequested,
            AppError::FriendshipsRequestPending,
        ] {
            assert_eq!(e.http_status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn not_found_variants_map_to_not_found_status() {
        for e in [
            AppError::UsersNotFound,
            AppError::FriendshipsRequestNotFound,
            AppError::FriendshipsNotFound,
            AppError::NotificationsNotFound,
        ] {
            assert_eq!(e.http_status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn codes_are_namespaced_by_domain() {
        assert_eq!(AppError::FriendshipsSelfRequest.code(), "friendships.self_request");
        assert_eq!(AppError::MessagesOnlyFriends.code(), "messages.only_friends");
        assert_eq!(AppError::NotificationsNotFound.code(), "notifications.not_found");
    }
}
