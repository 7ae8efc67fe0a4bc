use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::sessions::Session;
use crate::repositories::sessions;
use uuid::Uuid;

/// Resolves a bearer token to a session. An unknown token is indistinguishable
/// from an expired one; both read as unauthorized.
pub async fn fetch_one<C: Context>(ctx: &C, token: Uuid) -> ServiceResult<Session> {
    match sessions::fetch_one(ctx, token).await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(AppError::Unauthorized),
        Err(e) => unexpected(e),
    }
}
