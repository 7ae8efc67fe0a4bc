use crate::common::context::Context;
use crate::common::redis_json::Json;
use crate::entities::sessions::Session;
use redis::AsyncCommands;
use uuid::Uuid;

fn make_session_key(token: Uuid) -> String {
    format!("skillshare:sessions:{token}")
}

/// Looks up a session by its bearer token. Sessions are written by the
/// authentication layer; this service only reads them.
pub async fn fetch_one<C: Context>(ctx: &C, token: Uuid) -> anyhow::Result<Option<Session>> {
    let mut redis = ctx.redis().await?;
    let session: Option<Json<Session>> = redis.get(make_session_key(token)).await?;
    Ok(session.map(Json::into_inner))
}
