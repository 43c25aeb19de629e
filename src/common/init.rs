use crate::common::state::AppState;
use crate::settings::AppSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        // .json()
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = initialize_db(settings).await?;
    initialize_schema(&db).await?;
    Ok(AppState { db })
}

pub async fn initialize_db(settings: &AppSettings) -> sqlx::Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .acquire_timeout(settings.db_wait_timeout)
        .max_connections(settings.db_max_connections as _)
        .connect_with(options)
        .await
}

/// Tables are created on startup so a fresh database file is usable
/// without a separate provisioning step.
pub async fn initialize_schema(db: &Pool<Sqlite>) -> sqlx::Result<()> {
    const CREATE_USERS: &str = const_str::concat!(
        "CREATE TABLE IF NOT EXISTS users (",
        "userId TEXT PRIMARY KEY,",
        "displayName TEXT",
        ")"
    );
    const CREATE_MESSAGES: &str = const_str::concat!(
        "CREATE TABLE IF NOT EXISTS messages (",
        "messageId INTEGER PRIMARY KEY AUTOINCREMENT,",
        "senderId TEXT,",
        "receiverId TEXT,",
        "content TEXT,",
        "timestamp DATETIME,",
        "FOREIGN KEY (senderId) REFERENCES users(userId),",
        "FOREIGN KEY (receiverId) REFERENCES users(userId)",
        ")"
    );
    sqlx::query(CREATE_USERS).execute(db).await?;
    sqlx::query(CREATE_MESSAGES).execute(db).await?;
    Ok(())
}
