use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::users::{CreateUserArgs, User};
use crate::repositories::users;
use crate::usecases::require;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<User> {
    match users::fetch_one(ctx, user_id).await {
        Ok(user) => Ok(User::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs) -> ServiceResult<User> {
    let user_id = require(args.user_id, AppError::UsersMissingUserId)?;
    let display_name = require(args.display_name, AppError::UsersMissingDisplayName)?;
    match users::create(ctx, &user_id, &display_name).await {
        Ok(()) => Ok(User {
            user_id,
            display_name,
        }),
        Err(e) => unexpected(e),
    }
}
