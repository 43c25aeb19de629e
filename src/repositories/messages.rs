use crate::common::context::Context;
use crate::entities::messages::Message;
use chrono::NaiveDateTime;

const READ_FIELDS: &str = const_str::concat!(
    "m.messageId AS message_id, m.content, m.timestamp, ",
    "s.userId AS sender_id, s.displayName AS sender_name, ",
    "r.userId AS receiver_id, r.displayName AS receiver_name"
);
const FROM_JOINED: &str = const_str::concat!(
    " FROM messages m",
    " INNER JOIN users s ON m.senderId = s.userId",
    " INNER JOIN users r ON m.receiverId = r.userId"
);

pub async fn create<C: Context>(
    ctx: &C,
    sender_id: &str,
    receiver_id: &str,
    content: &str,
    timestamp: NaiveDateTime,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO messages (senderId, receiverId, content, timestamp) ",
        "VALUES (?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .bind(timestamp)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_rowid()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        FROM_JOINED,
        " WHERE m.messageId = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_history<C: Context>(ctx: &C, user_id: &str) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        FROM_JOINED,
        " WHERE m.senderId = ? OR m.receiverId = ?",
        " ORDER BY m.messageId ASC"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}
