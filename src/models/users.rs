use crate::entities::users::User as UserEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.user_id,
            display_name: value.display_name,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateUserArgs {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}
