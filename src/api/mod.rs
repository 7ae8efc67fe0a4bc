use crate::common::context::Context;
use crate::common::error::AppError;
use crate::common::init;
use crate::common::redis_pool::{PoolResult, RedisPool};
use crate::common::state::AppState;
use crate::settings::AppSettings;
use crate::usecases::sessions;
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use sqlx::{MySql, Pool};
use std::net::SocketAddr;
use tracing::info;
use uuid::Uuid;

pub mod v1;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
}

/// The verified caller identity, resolved from the bearer session token.
/// Never read from the request body.
pub struct CurrentUser {
    pub user_id: i64,
}

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", v1::router())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            redis: state.redis.clone(),
        })
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;
        let token = Uuid::parse_str(token.trim()).map_err(|_| AppError::Unauthorized)?;

        let ctx = RequestContext {
            db: state.db.clone(),
            redis: state.redis.clone(),
        };
        let session = sessions::fetch_one(&ctx, token).await?;
        Ok(Self {
            user_id: session.user_id,
        })
    }
}

#[async_trait]
impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    async fn redis(&self) -> PoolResult {
        self.redis.get().await
    }
}
