use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::friendships::Friendship;
use crate::models::friendships::{CreatedRequest, FriendEntry, FriendRequestEntry};
use crate::models::notifications::NotificationKind;
use crate::models::users::UserProfile;
use crate::repositories::friendships;
use crate::usecases::{notifications, users};

const FRIEND_REQUEST_MESSAGE: &str = "You have a new friend request";
const FRIEND_ACCEPTED_MESSAGE: &str = "Your friend request was accepted";

/// Classifies an existing edge for the pair into the specific conflict the
/// caller ran into: already friends, already sent, or the target already
/// sent a request the other way.
fn duplicate_error(existing: &Friendship, caller_id: i64) -> AppError {
    if existing.accepted {
        AppError::FriendshipsAlreadyFriends
    } else if existing.requester_id == caller_id {
        AppError::FriendshipsAlreadyRequested
    } else {
        AppError::FriendshipsRequestPending
    }
}

/// The other party of an edge, from one party's point of view.
fn counterpart(edge: &Friendship, user_id: i64) -> i64 {
    if edge.requester_id == user_id {
        edge.addressee_id
    } else {
        edge.requester_id
    }
}

pub async fn send_request<C: Context>(
    ctx: &C,
    caller_id: i64,
    target_id: i64,
) -> ServiceResult<CreatedRequest> {
    if target_id == caller_id {
        return Err(AppError::FriendshipsSelfRequest);
    }
    let target = users::fetch_one(ctx, target_id).await?;

    match friendships::fetch_one_by_pair(ctx, caller_id, target_id).await {
        Ok(Some(existing)) => return Err(duplicate_error(&existing, caller_id)),
        Ok(None) => {}
        Err(e) => return unexpected(e),
    }

    let edge = match friendships::create(ctx, caller_id, target_id).await {
        Ok(edge) => edge,
        // A concurrent request for the same pair lost the race against the
        // unique key over (user_lo, user_hi).
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::FriendshipsAlreadyRequested);
        }
        Err(e) => return unexpected(e),
    };

    notifications::emit(
        ctx,
        target_id,
        NotificationKind::FriendRequest,
        FRIEND_REQUEST_MESSAGE,
    )
    .await;

    Ok(CreatedRequest {
        id: edge.id,
        created_at: edge.created_at,
        user: UserProfile::from(target),
    })
}

/// Accepts a pending request. Only the addressee may accept; a request that
/// does not exist, was already accepted, or names a different addressee all
/// read as not-found, so existence is never revealed to a non-party.
pub async fn accept_request<C: Context>(
    ctx: &C,
    caller_id: i64,
    request_id: u64,
) -> ServiceResult<()> {
    let edge = match friendships::fetch_one(ctx, request_id).await {
        Ok(edge) => edge,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::FriendshipsRequestNotFound),
        Err(e) => return unexpected(e),
    };
    if edge.addressee_id != caller_id || edge.accepted {
        return Err(AppError::FriendshipsRequestNotFound);
    }

    // The shape conditions are re-checked inside the UPDATE, so a racing
    // accept or cancel leaves exactly one winner.
    let transitioned = match friendships::accept(ctx, request_id, caller_id).await {
        Ok(rows) => rows,
        Err(e) => return unexpected(e),
    };
    if transitioned == 0 {
        return Err(AppError::FriendshipsRequestNotFound);
    }

    notifications::emit(
        ctx,
        edge.requester_id,
        NotificationKind::FriendAccepted,
        FRIEND_ACCEPTED_MESSAGE,
    )
    .await;
    Ok(())
}

/// Deletes a pending request where the caller is either party: the sender
/// cancelling and the receiver rejecting are the same operation.
pub async fn cancel_request<C: Context>(
    ctx: &C,
    caller_id: i64,
    request_id: u64,
) -> ServiceResult<()> {
    match friendships::delete_pending(ctx, request_id, caller_id).await {
        Ok(0) => Err(AppError::FriendshipsRequestNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

/// Deletes an accepted friendship where the caller is either party. Leaves
/// no residual state; a fresh request between the pair is legal afterwards.
pub async fn remove_friend<C: Context>(
    ctx: &C,
    caller_id: i64,
    friendship_id: u64,
) -> ServiceResult<()> {
    match friendships::delete_accepted(ctx, friendship_id, caller_id).await {
        Ok(0) => Err(AppError::FriendshipsNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_friends<C: Context>(ctx: &C, caller_id: i64) -> ServiceResult<Vec<FriendEntry>> {
    match friendships::fetch_accepted(ctx, caller_id).await {
        Ok(entries) => Ok(entries.into_iter().map(FriendEntry::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_incoming<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<FriendRequestEntry>> {
    match friendships::fetch_incoming(ctx, caller_id).await {
        Ok(entries) => Ok(entries.into_iter().map(FriendRequestEntry::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_outgoing<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<FriendRequestEntry>> {
    match friendships::fetch_outgoing(ctx, caller_id).await {
        Ok(entries) => Ok(entries.into_iter().map(FriendRequestEntry::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// The access gate: true iff an accepted edge exists for the unordered pair.
/// Read-only; messaging and feed composition consult this before acting.
pub async fn are_connected<C: Context>(ctx: &C, user_a: i64, user_b: i64) -> ServiceResult<bool> {
    match friendships::exists_accepted(ctx, user_a, user_b).await {
        Ok(connected) => Ok(connected),
        Err(e) => unexpected(e),
    }
}

/// User ids that are a party to any edge with the caller, accepted or
/// pending, in either direction. The exclusion set for suggestions.
pub async fn fetch_related_user_ids<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<i64>> {
    match friendships::fetch_involving(ctx, caller_id).await {
        Ok(edges) => Ok(edges
            .iter()
            .map(|edge| counterpart(edge, caller_id))
            .collect()),
        Err(e) => unexpected(e),
    }
}

/// Accepted counterparts plus the caller; the id set whose content is
/// visible in the caller's feed.
pub async fn fetch_visible_user_ids<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<i64>> {
    let edges = match friendships::fetch_involving(ctx, caller_id).await {
        Ok(edges) => edges,
        Err(e) => return unexpected(e),
    };
    let mut visible: Vec<i64> = edges
        .iter()
        .filter(|edge| edge.accepted)
        .map(|edge| counterpart(edge, caller_id))
        .collect();
    visible.push(caller_id);
    Ok(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn edge(requester_id: i64, addressee_id: i64, accepted: bool) -> Friendship {
        Friendship {
            id: 1,
            requester_id,
            addressee_id,
            accepted,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn accepted_edge_reads_as_already_friends_for_both_parties() {
        let existing = edge(1, 2, true);
        assert_eq!(
            duplicate_error(&existing, 1),
            AppError::FriendshipsAlreadyFriends
        );
        assert_eq!(
            duplicate_error(&existing, 2),
            AppError::FriendshipsAlreadyFriends
        );
    }

    #[test]
    fn pending_edge_distinguishes_sender_from_receiver() {
        let existing = edge(1, 2, false);
        // The original sender asking again.
        assert_eq!(
            duplicate_error(&existing, 1),
            AppError::FriendshipsAlreadyRequested
        );
        // The addressee requesting back while the first request is open.
        assert_eq!(
            duplicate_error(&existing, 2),
            AppError::FriendshipsRequestPending
        );
    }

    #[test]
    fn counterpart_is_symmetric() {
        let e = edge(1, 2, true);
        assert_eq!(counterpart(&e, 1), 2);
        assert_eq!(counterpart(&e, 2), 1);
    }
}
