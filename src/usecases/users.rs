use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::users::User;
use crate::repositories::users;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<User> {
    match users::fetch_one(ctx, user_id).await {
        Ok(user) => Ok(user),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    match users::fetch_all(ctx).await {
        Ok(users) => Ok(users),
        Err(e) => unexpected(e),
    }
}
