use crate::entities::messages::Message as MessageEntity;
use crate::models::users::User;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stored timestamp representation, as SQLite renders DATETIME text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Deserialize)]
pub struct SendMessageArgs {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "senderId")]
    pub sender_id: Option<String>,
    #[serde(default, rename = "receiverId")]
    pub receiver_id: Option<String>,
}

#[derive(Deserialize)]
pub struct FetchHistoryArgs {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct ResponseBase {
    pub status: u16,
}

impl Default for ResponseBase {
    fn default() -> Self {
        Self { status: 200 }
    }
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub sender: User,
    pub receiver: User,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            sender: User {
                user_id: value.sender_id,
                display_name: value.sender_name,
            },
            receiver: User {
                user_id: value.receiver_id,
                display_name: value.receiver_name,
            },
            content: value.content,
            timestamp: value.timestamp,
        }
    }
}

/// Serializes as `[messageId, senderId, receiverId, content, timestamp]`.
/// Clients rely on the field order.
#[derive(Debug, Serialize)]
pub struct HistoryEntry(pub i64, pub String, pub String, pub String, pub String);

impl From<MessageEntity> for HistoryEntry {
    fn from(value: MessageEntity) -> Self {
        Self(
            value.message_id,
            value.sender_id,
            value.receiver_id,
            value.content,
            value.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        )
    }
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    #[serde(flatten)]
    pub base: ResponseBase,
    pub message: Message,
}

#[derive(Serialize)]
pub struct ChatHistoryResponse {
    #[serde(flatten)]
    pub base: ResponseBase,
    pub chat_history: Vec<HistoryEntry>,
}
