use crate::common::context::Context;
use crate::entities::users::User;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "userId, displayName";

pub async fn fetch_one<C: Context>(ctx: &C, user_id: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE userId = ?"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_one(ctx.db()).await
}

pub async fn create<C: Context>(ctx: &C, user_id: &str, display_name: &str) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT OR REPLACE INTO ",
        TABLE_NAME,
        " (userId, displayName) VALUES (?, ?)"
    );
    sqlx::query(QUERY)
        .bind(user_id)
        .bind(display_name)
        .execute(ctx.db())
        .await?;
    Ok(())
}
