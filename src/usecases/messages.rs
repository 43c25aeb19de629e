use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messages::{FetchHistoryArgs, HistoryEntry, Message, SendMessageArgs};
use crate::repositories::messages;
use crate::usecases::{require, users};
use chrono::Utc;
use tracing::{debug, info};

pub async fn send<C: Context>(ctx: &C, args: SendMessageArgs) -> ServiceResult<Message> {
    let content = require(args.content, AppError::MessagesMissingContent)?;
    let sender_id = require(args.sender_id, AppError::MessagesMissingSender)?;
    let receiver_id = require(args.receiver_id, AppError::MessagesMissingReceiver)?;

    // Both participants must exist before anything is written; a dangling
    // sender or receiver reference is never stored.
    let sender = users::fetch_one(ctx, &sender_id).await?;
    let receiver = users::fetch_one(ctx, &receiver_id).await?;

    let timestamp = Utc::now().naive_utc();
    let message = messages::create(
        ctx,
        &sender.user_id,
        &receiver.user_id,
        &content,
        timestamp,
    )
    .await?;
    info!(
        "Wrote \"{}\" from {} to {}",
        message.content, message.sender_name, message.receiver_name
    );
    Ok(Message::from(message))
}

pub async fn fetch_history<C: Context>(
    ctx: &C,
    args: FetchHistoryArgs,
) -> ServiceResult<Vec<HistoryEntry>> {
    let user_id = require(args.user_id, AppError::MessagesMissingUserId)?;
    match messages::fetch_history(ctx, &user_id).await {
        Ok(messages) => {
            debug!("messages to & from {user_id}: {} messages", messages.len());
            Ok(messages.into_iter().map(HistoryEntry::from).collect())
        }
        Err(e) => unexpected(e),
    }
}
