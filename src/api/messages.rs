use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::messages::{
    ChatHistoryResponse, FetchHistoryArgs, ResponseBase, SendMessageArgs, SendMessageResponse,
};
use crate::usecases::messages;
use axum::Json;
use axum::extract::Query;

/// `POST /api/message` — parameters arrive in the query string, not a
/// request body. Existing clients depend on that shape.
pub async fn send(
    ctx: RequestContext,
    Query(args): Query<SendMessageArgs>,
) -> ServiceResponse<SendMessageResponse> {
    let message = messages::send(&ctx, args).await?;
    Ok(Json(SendMessageResponse {
        base: ResponseBase::default(),
        message,
    }))
}

/// `GET /api/message` — every message the user has sent or received.
pub async fn fetch_history(
    ctx: RequestContext,
    Query(args): Query<FetchHistoryArgs>,
) -> ServiceResponse<ChatHistoryResponse> {
    let chat_history = messages::fetch_history(&ctx, args).await?;
    Ok(Json(ChatHistoryResponse {
        base: ResponseBase::default(),
        chat_history,
    }))
}
