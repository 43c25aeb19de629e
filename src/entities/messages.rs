use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A message row joined with both participant records.
#[derive(Debug, FromRow)]
pub struct Message {
    pub message_id: i64,
    pub sender_id: String,
    pub sender_name: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
}
