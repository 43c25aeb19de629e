use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::users::{CreateUserArgs, User};
use crate::usecases::users;
use axum::Json;
use axum::extract::Query;

/// `POST /api/users` — upserts a user record.
pub async fn create(
    ctx: RequestContext,
    Query(args): Query<CreateUserArgs>,
) -> ServiceResponse<User> {
    let user = users::create(&ctx, args).await?;
    Ok(Json(user))
}
