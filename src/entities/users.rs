use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    #[sqlx(rename = "userId")]
    pub user_id: String,
    #[sqlx(rename = "displayName")]
    pub display_name: String,
}
