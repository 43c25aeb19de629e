use crate::common::context::Context;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
}

impl Context for AppState {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}
